use embedded_io_async::{Read, Write};
use heapless::{String, Vec};
use serde::Deserialize;

use super::headers::{BufferedWriter as _, RequestHeaders, find_content_length, parse_status_line, read_heading};
use super::{HttpError, HttpResult, io_error};
use crate::domain::dto::StatusText;

const HEADER_BUFFER_SIZE: usize = 512;
const BODY_BUFFER_SIZE: usize = 512;
const BODY_RX_CHUNK_SIZE: usize = 128;

/// Response received from the device.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: StatusText,
    body: Vec<u8, BODY_BUFFER_SIZE>,
}

impl HttpResponse {
    pub const fn is_success(&self) -> bool {
        self.status == 200
    }

    pub fn body(&self) -> &[u8] {
        self.body.as_slice()
    }

    /// Body as text, if it is valid UTF-8
    pub fn body_str(&self) -> Option<&str> {
        core::str::from_utf8(self.body.as_slice()).ok()
    }

    /// Parse the body as JSON
    pub fn json<'a, T: Deserialize<'a>>(&'a self) -> Result<T, serde_json_core::de::Error> {
        let (data, _) = serde_json_core::from_slice(self.body.as_slice())?;
        Ok(data)
    }
}

/// Client side of a single HTTP/1.1 exchange.
pub struct HttpConnection<S> {
    stream: S,
}

impl<S: Read + Write> HttpConnection<S> {
    pub fn new(stream: S) -> Self {
        Self { stream }
    }

    /// Write the request head and body
    pub async fn send(&mut self, headers: &RequestHeaders<'_>, body: &[u8]) -> HttpResult {
        let mut head = String::<HEADER_BUFFER_SIZE>::new();
        headers.write_to(&mut head)?;
        self.stream
            .write_all(head.as_bytes())
            .await
            .map_err(io_error)?;
        if !body.is_empty() {
            self.stream.write_all(body).await.map_err(io_error)?;
        }
        self.stream.flush().await.map_err(io_error)?;
        Ok(())
    }

    /// Read the response head and body
    ///
    /// Without a `Content-Length` the body runs until the server closes the connection.
    pub async fn receive(&mut self) -> Result<HttpResponse, HttpError> {
        let mut header_buf = [0u8; HEADER_BUFFER_SIZE];
        let (header_end, header_len) = read_heading(&mut header_buf, &mut self.stream).await?;

        let header_str =
            core::str::from_utf8(&header_buf[..header_end]).map_err(|_| HttpError::Parse)?;
        let (status, reason, rest_headers) =
            parse_status_line(header_str).ok_or(HttpError::Parse)?;
        let content_length = find_content_length(rest_headers);

        let mut status_text = StatusText::new();
        for c in reason.chars() {
            if status_text.push(c).is_err() {
                break;
            }
        }

        let mut body = Vec::<u8, BODY_BUFFER_SIZE>::new();
        if let Some(length) = content_length {
            if length > body.capacity() {
                return Err(HttpError::TooLarge);
            }
        }
        body.extend_from_slice(&header_buf[header_end..header_len])
            .map_err(|()| HttpError::TooLarge)?;

        loop {
            if content_length.is_some_and(|length| body.len() >= length) {
                break;
            }
            let mut chunk = [0u8; BODY_RX_CHUNK_SIZE];
            let n = self.stream.read(&mut chunk).await.map_err(io_error)?;
            if n == 0 {
                if content_length.is_some() {
                    return Err(HttpError::Closed);
                }
                break;
            }
            body.extend_from_slice(&chunk[..n])
                .map_err(|()| HttpError::TooLarge)?;
        }
        if let Some(length) = content_length {
            body.truncate(length);
        }

        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}
