use chrono::NaiveDateTime;

use crate::http::mime::ContentType;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Status codes the worker can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use webworker::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }

    /// 200 when the resolved path is an existing regular file, else 404.
    pub fn for_file_exists(exists: bool) -> Self {
        if exists { StatusCode::Ok } else { StatusCode::NotFound }
    }
}

/// The status line and header block of a response.
///
/// Headers are fixed: Date, Server, `Connection: close` and, when the
/// path matched a known type, Content-Type. There is never a
/// Content-Length; the client reads until the connection closes.
#[derive(Debug, Clone)]
pub struct ResponseHead {
    pub status: StatusCode,
    /// Preformatted value of the Date header
    pub date: String,
    pub server: String,
    pub content_type: Option<ContentType>,
}

impl ResponseHead {
    pub fn new(
        status: StatusCode,
        date: impl Into<String>,
        server: impl Into<String>,
        content_type: Option<ContentType>,
    ) -> Self {
        Self {
            status,
            date: date.into(),
            server: server.into(),
            content_type,
        }
    }

    /// Serialize to wire bytes, including the terminating blank line.
    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(128);

        let status_line = format!(
            "{} {} {}\r\n",
            HTTP_VERSION,
            self.status.as_u16(),
            self.status.reason_phrase()
        );
        buf.extend_from_slice(status_line.as_bytes());

        push_header(&mut buf, "Date", &self.date);
        push_header(&mut buf, "Server", &self.server);
        push_header(&mut buf, "Connection", "close");
        if let Some(content_type) = self.content_type {
            push_header(&mut buf, "Content-Type", content_type.as_str());
        }

        buf.extend_from_slice(b"\r\n");
        buf
    }
}

fn push_header(buf: &mut Vec<u8>, key: &str, value: &str) {
    buf.extend_from_slice(key.as_bytes());
    buf.extend_from_slice(b": ");
    buf.extend_from_slice(value.as_bytes());
    buf.extend_from_slice(b"\r\n");
}

/// Medium date-time style used in the Date header, e.g. `Oct 19, 2026, 3:04:05 PM`.
pub fn format_date(now: &NaiveDateTime) -> String {
    now.format("%b %-d, %Y, %-I:%M:%S %p").to_string()
}
