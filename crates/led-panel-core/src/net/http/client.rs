use log::debug;
use serde::Serialize;

use super::connection::{HttpConnection, HttpResponse};
use super::headers::{CacheControl, ContentHeaders, ContentType, RequestHeaders};
use super::{Connector, HttpError};

const REQUEST_BODY_SIZE: usize = 128;

/// Minimal HTTP/1.1 client for a single device.
pub struct HttpClient<'a, C: Connector> {
    connector: C,
    host: &'a str,
    port: u16,
}

impl<'a, C: Connector> HttpClient<'a, C> {
    pub fn new(connector: C, host: &'a str, port: u16) -> Self {
        Self {
            connector,
            host,
            port,
        }
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Send a GET request
    pub async fn get(&mut self, path: &str) -> Result<HttpResponse, HttpError> {
        let headers = RequestHeaders::get(self.host, path).with_port(self.port);
        self.request(&headers, &[]).await
    }

    /// Send `body` as JSON in a POST request
    pub async fn post_json<T: Serialize>(
        &mut self,
        path: &str,
        body: &T,
    ) -> Result<HttpResponse, HttpError> {
        let mut buf = [0u8; REQUEST_BODY_SIZE];
        let n = serde_json_core::to_slice(body, &mut buf).map_err(|_| HttpError::Serialize)?;
        let headers = RequestHeaders::post(self.host, path)
            .with_port(self.port)
            .with_content(ContentHeaders::new(ContentType::Json, n))
            .with_cache_control(CacheControl::NoCache);
        self.request(&headers, &buf[..n]).await
    }

    async fn request(
        &mut self,
        headers: &RequestHeaders<'_>,
        body: &[u8],
    ) -> Result<HttpResponse, HttpError> {
        let stream = self.connector.connect().await?;
        let mut conn = HttpConnection::new(stream);
        conn.send(headers, body).await?;
        let response = conn.receive().await?;
        debug!(
            "http: {} {} -> {}",
            headers.method().as_str(),
            headers.path(),
            response.status
        );
        Ok(response)
    }
}
