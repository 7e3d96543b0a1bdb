//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use core::str::FromStr;
use std::collections::VecDeque;

use embedded_io_async::{ErrorKind, ErrorType, Read, Write};

use led_panel_core::domain::{
    ApiError, ControlReply, LedId, LedPanelApi, LedState, Message, Notifier, PanelView,
    ReportedState, StatusResponse, StatusText, ToggleRequest,
};
use led_panel_core::net::http::{Connector, HttpError};
use led_panel_core::view::LedWidget;

// -----------------------------------------------------------------------------
// Ports
// -----------------------------------------------------------------------------

/// Status as the device would report it, anything but "on"/"off" is unexpected
pub fn status(led1: &str, led2: &str) -> StatusResponse {
    StatusResponse {
        led1: Some(reported(led1)),
        led2: Some(reported(led2)),
    }
}

fn reported(value: &str) -> ReportedState {
    LedState::parse(value).map_or(ReportedState::Unexpected, ReportedState::from_state)
}

pub fn message(text: &str) -> ControlReply {
    ControlReply::Message(Message::from_str(text).unwrap())
}

pub fn rejected(status: u16, status_text: &str) -> ControlReply {
    ControlReply::Rejected {
        status,
        status_text: StatusText::from_str(status_text).unwrap(),
    }
}

/// Scripted device API recording every call
#[derive(Default)]
pub struct MockApi {
    pub statuses: VecDeque<Result<StatusResponse, ApiError>>,
    pub replies: VecDeque<Result<ControlReply, ApiError>>,
    pub sent: Vec<ToggleRequest>,
    pub status_calls: usize,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: Result<StatusResponse, ApiError>) -> Self {
        self.statuses.push_back(status);
        self
    }

    pub fn with_reply(mut self, reply: Result<ControlReply, ApiError>) -> Self {
        self.replies.push_back(reply);
        self
    }
}

impl LedPanelApi for MockApi {
    async fn fetch_status(&mut self) -> Result<StatusResponse, ApiError> {
        self.status_calls += 1;
        self.statuses
            .pop_front()
            .unwrap_or(Err(ApiError::Http(HttpError::Connect)))
    }

    async fn send_toggle(&mut self, request: &ToggleRequest) -> Result<ControlReply, ApiError> {
        self.sent.push(*request);
        self.replies
            .pop_front()
            .unwrap_or(Err(ApiError::Http(HttpError::Connect)))
    }
}

#[derive(Default)]
pub struct RecordingView {
    pub renders: Vec<(LedId, LedWidget)>,
}

impl RecordingView {
    /// Last widget rendered for `led`
    pub fn widget(&self, led: LedId) -> &LedWidget {
        self.renders
            .iter()
            .rev()
            .find(|(id, _)| *id == led)
            .map(|(_, widget)| widget)
            .expect("LED never rendered")
    }
}

impl PanelView for RecordingView {
    fn render(&mut self, led: LedId, widget: &LedWidget) {
        self.renders.push((led, widget.clone()));
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub alerts: Vec<String>,
    pub diagnostics: Vec<String>,
}

impl Notifier for RecordingNotifier {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn diagnostic(&mut self, message: &str) {
        self.diagnostics.push(message.to_string());
    }
}

// -----------------------------------------------------------------------------
// Transport
// -----------------------------------------------------------------------------

/// In-memory connection replaying a canned response
pub struct ScriptedStream<'a> {
    response: Vec<u8>,
    pos: usize,
    chunk: usize,
    written: &'a mut Vec<u8>,
}

impl ErrorType for ScriptedStream<'_> {
    type Error = ErrorKind;
}

impl Read for ScriptedStream<'_> {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let remaining = &self.response[self.pos..];
        let n = remaining.len().min(buf.len()).min(self.chunk);
        buf[..n].copy_from_slice(&remaining[..n]);
        self.pos += n;
        Ok(n)
    }
}

impl Write for ScriptedStream<'_> {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Hands out one scripted connection per queued response
pub struct MockConnector {
    pub responses: VecDeque<Vec<u8>>,
    pub requests: Vec<Vec<u8>>,
    pub chunk: usize,
}

impl MockConnector {
    pub fn new() -> Self {
        Self {
            responses: VecDeque::new(),
            requests: Vec::new(),
            chunk: usize::MAX,
        }
    }

    /// Deliver responses `chunk` bytes per read
    pub fn with_chunk(mut self, chunk: usize) -> Self {
        self.chunk = chunk;
        self
    }

    pub fn with_response(self, raw: &str) -> Self {
        self.with_raw_response(raw.as_bytes())
    }

    pub fn with_raw_response(mut self, raw: &[u8]) -> Self {
        self.responses.push_back(raw.to_vec());
        self
    }

    pub fn request(&self, index: usize) -> &str {
        core::str::from_utf8(&self.requests[index]).unwrap()
    }
}

impl Connector for MockConnector {
    type Connection<'a>
        = ScriptedStream<'a>
    where
        Self: 'a;

    async fn connect(&mut self) -> Result<Self::Connection<'_>, HttpError> {
        let response = self.responses.pop_front().ok_or(HttpError::Connect)?;
        let chunk = self.chunk;
        self.requests.push(Vec::new());
        let written = self.requests.last_mut().unwrap();
        Ok(ScriptedStream {
            response,
            pos: 0,
            chunk,
            written,
        })
    }
}

/// Build a raw HTTP response with a JSON body
pub fn json_response(status_line: &str, body: &str) -> String {
    format!(
        "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    )
}
