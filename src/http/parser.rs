use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::timeout;

use crate::http::request::{Request, VERB};

#[derive(Debug)]
pub enum ParseError {
    /// The underlying read failed
    Io(std::io::Error),
    /// No line arrived within the configured read timeout
    TimedOut,
    /// The client closed the stream before the blank line
    Eof,
    /// A non-empty line too short to inspect, or a request line with no path
    ShortLine,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Io(e) => write!(f, "read failed: {e}"),
            ParseError::TimedOut => write!(f, "timed out waiting for request line"),
            ParseError::Eof => write!(f, "stream closed before end of headers"),
            ParseError::ShortLine => write!(f, "truncated request line"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Outcome of inspecting a single header-block line.
#[derive(Debug, PartialEq, Eq)]
pub enum Line<'a> {
    /// The blank line ending the header block
    End,
    /// A request line; carries the path
    RequestLine(&'a str),
    /// Any other header, ignored
    Header,
}

/// Classify one line (terminator already stripped).
///
/// A line is a request line when its first three bytes are the verb. The
/// path is whatever follows the verb and one separator, up to the next
/// space. Lines shorter than the verb are rejected, as are request lines
/// that stop before the path begins.
pub fn parse_line(line: &str) -> Result<Line<'_>, ParseError> {
    if line.is_empty() {
        return Ok(Line::End);
    }

    let head = line.get(..VERB.len()).ok_or(ParseError::ShortLine)?;
    if head != VERB {
        return Ok(Line::Header);
    }

    let rest = line.get(VERB.len() + 1..).ok_or(ParseError::ShortLine)?;
    let path = rest.split(' ').next().unwrap_or_default();
    Ok(Line::RequestLine(path))
}

/// Read the header block and extract the requested path.
///
/// Best effort: a read error, timeout, early EOF or malformed line stops
/// parsing and the request is returned with whatever path was found so
/// far. Only the first request line sets the path.
pub async fn read_request<R>(reader: &mut R, read_timeout: Option<Duration>) -> Request
where
    R: AsyncBufRead + Unpin,
{
    let mut request = Request::default();
    let mut path_seen = false;
    let mut buf = String::new();

    loop {
        buf.clear();

        if let Err(e) = read_line(reader, &mut buf, read_timeout).await {
            tracing::warn!(error = %e, path = %request.path, "Request error");
            break;
        }

        let line = buf.strip_suffix('\n').unwrap_or(&buf);
        let line = line.strip_suffix('\r').unwrap_or(line);
        tracing::debug!(line = %line, "Request line");

        match parse_line(line) {
            Ok(Line::End) => break,
            Ok(Line::RequestLine(path)) => {
                if !path_seen {
                    request.path = path.to_string();
                    path_seen = true;
                }
            }
            Ok(Line::Header) => {}
            Err(e) => {
                tracing::warn!(error = %e, path = %request.path, "Request error");
                break;
            }
        }
    }

    request
}

async fn read_line<R>(
    reader: &mut R,
    buf: &mut String,
    read_timeout: Option<Duration>,
) -> Result<(), ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let n = match read_timeout {
        Some(limit) => timeout(limit, reader.read_line(buf))
            .await
            .map_err(|_| ParseError::TimedOut)?,
        None => reader.read_line(buf).await,
    }
    .map_err(ParseError::Io)?;

    if n == 0 {
        return Err(ParseError::Eof);
    }
    Ok(())
}
