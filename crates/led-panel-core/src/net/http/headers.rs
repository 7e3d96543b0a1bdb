use core::fmt::Write;

use embedded_io_async::Read;

use super::{HttpError, io_error};

const DEFAULT_PORT: u16 = 80;

/// HTTP Content Type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Json,
}

impl ContentType {
    /// Convert the content type to a string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
        }
    }
}

/// HTTP socket connection policy.
#[derive(Debug, Clone, Copy)]
pub enum ConnectionPolicy {
    Close,
}

impl ConnectionPolicy {
    /// Convert the connection type to a string.
    const fn as_str(&self) -> &'static str {
        match self {
            ConnectionPolicy::Close => "close",
        }
    }
}

/// Cache-Control request directive.
#[derive(Debug, Clone, Copy)]
pub enum CacheControl {
    NoCache,
}

impl CacheControl {
    const fn as_str(&self) -> &'static str {
        match self {
            CacheControl::NoCache => "no-cache",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub const fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

pub trait BufferedWriter {
    fn write_to(&self, writer: &mut impl Write) -> Result<(), core::fmt::Error>;
}

/// HTTP Content Headers.
pub struct ContentHeaders {
    content_type: ContentType,
    content_length: usize,
}

impl ContentHeaders {
    pub const fn new(content_type: ContentType, content_length: usize) -> Self {
        Self {
            content_type,
            content_length,
        }
    }
}

impl BufferedWriter for ContentHeaders {
    fn write_to(&self, writer: &mut impl Write) -> Result<(), core::fmt::Error> {
        write!(writer, "Content-Type: {}\r\n", self.content_type.as_str())?;
        write!(writer, "Content-Length: {}\r\n", self.content_length)?;
        Ok(())
    }
}

/// Request line and headers.
pub struct RequestHeaders<'a> {
    method: HttpMethod,
    path: &'a str,
    host: &'a str,
    port: u16,
    cache_control: Option<CacheControl>,
    connection: ConnectionPolicy,
    content: Option<ContentHeaders>,
}

impl<'a> RequestHeaders<'a> {
    pub const fn new(method: HttpMethod, host: &'a str, path: &'a str) -> Self {
        Self {
            method,
            path,
            host,
            port: DEFAULT_PORT,
            cache_control: None,
            connection: ConnectionPolicy::Close,
            content: None,
        }
    }

    pub const fn get(host: &'a str, path: &'a str) -> Self {
        Self::new(HttpMethod::Get, host, path)
    }

    pub const fn post(host: &'a str, path: &'a str) -> Self {
        Self::new(HttpMethod::Post, host, path)
    }

    /// Set the server port, shown in the `Host` header when not 80.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub const fn with_cache_control(mut self, cache_control: CacheControl) -> Self {
        self.cache_control = Some(cache_control);
        self
    }

    /// Set the content headers.
    #[must_use]
    pub const fn with_content(mut self, content: ContentHeaders) -> Self {
        self.content = Some(content);
        self
    }

    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    pub const fn path(&self) -> &str {
        self.path
    }
}

impl BufferedWriter for RequestHeaders<'_> {
    fn write_to(&self, writer: &mut impl Write) -> Result<(), core::fmt::Error> {
        write!(writer, "{} {} HTTP/1.1\r\n", self.method.as_str(), self.path)?;
        if self.port == DEFAULT_PORT {
            write!(writer, "Host: {}\r\n", self.host)?;
        } else {
            write!(writer, "Host: {}:{}\r\n", self.host, self.port)?;
        }
        if let Some(content) = &self.content {
            content.write_to(writer)?;
        }
        if let Some(cache_control) = &self.cache_control {
            write!(writer, "Cache-Control: {}\r\n", cache_control.as_str())?;
        }
        write!(writer, "Connection: {}\r\n", self.connection.as_str())?;
        write!(writer, "\r\n")?;
        Ok(())
    }
}

/// Parse the status line from the header string.
///
/// Returns the status code, reason phrase, and rest of the header string.
pub(super) fn parse_status_line(header_str: &str) -> Option<(u16, &str, &str)> {
    let line_end = header_str.find("\r\n").unwrap_or(header_str.len());
    let first_line = &header_str[..line_end];
    let mut parts = first_line.splitn(3, ' ');
    let version = parts.next()?;
    if !version.starts_with("HTTP/1.") {
        return None;
    }
    let status = parts.next()?.parse::<u16>().ok()?;
    let reason = parts.next().unwrap_or("").trim();
    let rest = header_str.get(line_end + 2..).unwrap_or("");

    Some((status, reason, rest))
}

/// Read the status line and headers from the stream.
///
/// Returns the position of the end of the headers and the number of bytes read.
/// Bytes past the end of the headers belong to the body.
pub(super) async fn read_heading<R: Read>(
    buf: &mut [u8],
    stream: &mut R,
) -> Result<(usize, usize), HttpError> {
    let mut header_len = 0;
    loop {
        if header_len >= buf.len() {
            return Err(HttpError::TooLarge);
        }
        let n = stream.read(&mut buf[header_len..]).await.map_err(io_error)?;
        if n == 0 {
            return Err(HttpError::Closed);
        }
        header_len += n;
        // Check for end of headers
        if let Some(pos) = buf[..header_len].windows(4).position(|w| w == b"\r\n\r\n") {
            return Ok((pos + 4, header_len));
        }
    }
}

/// Find the content length in the header string.
///
/// Returns the content length if found, otherwise None.
pub(super) fn find_content_length(header: &str) -> Option<usize> {
    const TARGET: &str = "content-length:";
    for line in header.lines() {
        if line
            .get(..TARGET.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(TARGET))
        {
            return line[TARGET.len()..].trim().parse::<usize>().ok();
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_with_reason() {
        let (status, reason, rest) =
            parse_status_line("HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\n\r\n")
                .unwrap();
        assert_eq!(status, 500);
        assert_eq!(reason, "Internal Server Error");
        assert!(rest.starts_with("Content-Length"));
    }

    #[test]
    fn status_line_without_reason() {
        let (status, reason, _) = parse_status_line("HTTP/1.0 200\r\n\r\n").unwrap();
        assert_eq!(status, 200);
        assert_eq!(reason, "");
    }

    #[test]
    fn status_line_rejects_garbage() {
        assert!(parse_status_line("SSH-2.0-OpenSSH\r\n\r\n").is_none());
        assert!(parse_status_line("HTTP/1.1 abc OK\r\n\r\n").is_none());
    }

    #[test]
    fn content_length_is_case_insensitive() {
        assert_eq!(
            find_content_length("content-type: text/plain\r\nCONTENT-LENGTH: 42\r\n"),
            Some(42)
        );
        assert_eq!(find_content_length("Connection: close\r\n"), None);
    }

    #[test]
    fn content_length_skips_short_and_non_ascii_lines() {
        assert_eq!(
            find_content_length("Via: a\r\nX-Tags: \u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\r\nContent-Length: 7\r\n"),
            Some(7)
        );
    }
}
