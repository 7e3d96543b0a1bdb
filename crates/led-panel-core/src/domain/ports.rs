#![allow(async_fn_in_trait)]

use crate::domain::dto::{ControlReply, StatusResponse, ToggleRequest};
use crate::domain::entity::LedId;
use crate::net::http::HttpError;
use crate::view::LedWidget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// Request did not complete
    Http(HttpError),
    /// Device answered with an unexpected status code
    Status { status: u16 },
    /// Response body is not the expected JSON
    Json,
}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        ApiError::Http(err)
    }
}

/// Remote LED device API
pub trait LedPanelApi {
    /// Read the status of both LEDs (`GET /led/stat`)
    async fn fetch_status(&mut self) -> Result<StatusResponse, ApiError>;

    /// Ask the device to set one LED (`POST /led/control`)
    ///
    /// A non-200 answer is a [`ControlReply::Rejected`], not an error.
    async fn send_toggle(&mut self, request: &ToggleRequest) -> Result<ControlReply, ApiError>;
}

/// Presentation of the panel widgets
pub trait PanelView {
    /// Replace everything shown for `led` with `widget`
    fn render(&mut self, led: LedId, widget: &LedWidget);
}

/// User-facing notifications
pub trait Notifier {
    /// Blocking notification the user has to acknowledge
    fn alert(&mut self, message: &str);

    /// Operator diagnostic line
    fn diagnostic(&mut self, message: &str) {
        log::error!("{}", message);
    }
}
