//! Response bodies.
//!
//! Three ways to produce a body, chosen per request:
//!
//! - **binary**: image paths are read and sent byte for byte
//! - **text**: an existing file is decoded as UTF-8 and its placeholders
//!   are filled in
//! - **not found**: an inline error fragment followed by the fallback page
//!
//! Existence is checked here independently of the status line. If the
//! file appears or vanishes between the two checks the status and the
//! body can disagree; nothing tries to prevent that.

use std::path::Path;

use anyhow::Context;
use bytes::Bytes;
use chrono::NaiveDate;

use crate::config::StaticConfig;
use crate::http::mime;

/// Replaced by the current date in served text files.
pub const DATE_TAG: &str = "<cs371date>";

/// Replaced by the configured server text. There is no closing `>` in the
/// match, so the bracket of a complete tag stays in the output.
pub const SERVER_TAG: &str = "<cs371server";

/// Written ahead of the fallback page on a 404.
pub const NOT_FOUND_FRAGMENT: &str = "<center> Error! Something isn't right here. </center>";

#[derive(Debug)]
pub enum Body {
    Binary(Bytes),
    Text(String),
    NotFound(String),
}

impl Body {
    pub fn kind(&self) -> &'static str {
        match self {
            Body::Binary(_) => "binary",
            Body::Text(_) => "text",
            Body::NotFound(_) => "not_found",
        }
    }

    pub fn into_bytes(self) -> Bytes {
        match self {
            Body::Binary(bytes) => bytes,
            Body::Text(text) | Body::NotFound(text) => Bytes::from(text),
        }
    }
}

/// `true` only for an existing regular file; any metadata error is `false`.
pub async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

/// Build the body for `request_path`.
///
/// Fails when a binary path does not exist or the fallback page is
/// missing. Neither case has a further fallback.
pub async fn load_body(
    request_path: &str,
    cfg: &StaticConfig,
    today: NaiveDate,
) -> anyhow::Result<Body> {
    let file = cfg.resolve(request_path);

    if mime::is_binary(request_path) {
        let data = tokio::fs::read(&file)
            .await
            .with_context(|| format!("failed to read {}", file.display()))?;
        return Ok(Body::Binary(Bytes::from(data)));
    }

    if is_file(&file).await {
        let data = tokio::fs::read(&file)
            .await
            .with_context(|| format!("failed to read {}", file.display()))?;
        let text = String::from_utf8_lossy(&data);
        let date = format_tag_date(today);
        return Ok(Body::Text(substitute_tags(&text, &date, &cfg.server_tag_text)));
    }

    let fallback = tokio::fs::read(&cfg.fallback_page)
        .await
        .with_context(|| {
            format!("failed to read fallback page {}", cfg.fallback_page.display())
        })?;

    let mut body = String::from(NOT_FOUND_FRAGMENT);
    body.push_str(&String::from_utf8_lossy(&fallback));
    Ok(Body::NotFound(body))
}

/// Fill in both placeholders. Each is a plain literal replace of every
/// occurrence; nothing else in the text is touched.
pub fn substitute_tags(text: &str, date: &str, server: &str) -> String {
    text.replace(DATE_TAG, date).replace(SERVER_TAG, server)
}

/// `mm/dd/yyyy`
pub fn format_tag_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}
