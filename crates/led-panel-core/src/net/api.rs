use log::warn;

use crate::config::PanelConfig;
use crate::domain::dto::{ControlReply, ControlResponse, Message, StatusResponse, ToggleRequest};
use crate::domain::ports::{ApiError, LedPanelApi};
use crate::net::http::{Connector, HttpClient};

/// [`LedPanelApi`] backed by the device's embedded HTTP server.
pub struct HttpLedPanelApi<C: Connector> {
    client: HttpClient<'static, C>,
    status_path: &'static str,
    control_path: &'static str,
}

impl<C: Connector> HttpLedPanelApi<C> {
    pub fn new(connector: C, config: &PanelConfig) -> Self {
        Self {
            client: HttpClient::new(connector, config.host, config.port),
            status_path: config.status_path,
            control_path: config.control_path,
        }
    }

    pub fn client(&self) -> &HttpClient<'static, C> {
        &self.client
    }
}

impl<C: Connector> LedPanelApi for HttpLedPanelApi<C> {
    async fn fetch_status(&mut self) -> Result<StatusResponse, ApiError> {
        let response = self.client.get(self.status_path).await?;
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
            });
        }

        response.json::<StatusResponse>().map_err(|e| {
            warn!("api: status parse error: {:?}", e);
            ApiError::Json
        })
    }

    async fn send_toggle(&mut self, request: &ToggleRequest) -> Result<ControlReply, ApiError> {
        let response = self.client.post_json(self.control_path, request).await?;
        if !response.is_success() {
            return Ok(ControlReply::Rejected {
                status: response.status,
                status_text: response.status_text,
            });
        }

        match response.json::<ControlResponse>() {
            Ok(ControlResponse {
                message: Some(message),
            }) => Ok(ControlReply::Message(truncated(message))),
            _ => {
                let raw = response.body_str().unwrap_or("");
                Ok(ControlReply::RawBody(truncated(raw)))
            }
        }
    }
}

/// Copy as much of `text` as fits into a [`Message`]
fn truncated(text: &str) -> Message {
    let mut message = Message::new();
    for c in text.chars() {
        if message.push(c).is_err() {
            break;
        }
    }
    message
}
