//! Content-type dispatch.
//!
//! Types are chosen by substring containment on the raw request path,
//! case-sensitive, first match wins. A path like `/a.html/b.png` is HTML.

/// Media types the server knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Html,
    Gif,
    Jpeg,
    Png,
    Icon,
}

/// Ordered (marker, type) table. Order matters.
const CONTENT_TYPES: &[(&str, ContentType)] = &[
    (".html", ContentType::Html),
    (".gif", ContentType::Gif),
    (".jpeg", ContentType::Jpeg),
    (".png", ContentType::Png),
    (".ico", ContentType::Icon),
];

/// Markers whose bodies are sent as raw bytes.
///
/// `favicon.cio` is kept as-is for compatibility with existing clients;
/// a `favicon.ico` request goes through the text path.
const BINARY_MARKERS: &[&str] = &[".gif", ".jpeg", ".png", "favicon.cio"];

impl ContentType {
    /// Pick the content type for a request path, if any marker matches.
    ///
    /// # Example
    ///
    /// ```
    /// # use webworker::http::mime::ContentType;
    /// assert_eq!(ContentType::from_path("/index.html"), Some(ContentType::Html));
    /// assert_eq!(ContentType::from_path("/notes.txt"), None);
    /// ```
    pub fn from_path(path: &str) -> Option<Self> {
        CONTENT_TYPES
            .iter()
            .find(|(marker, _)| path.contains(marker))
            .map(|(_, content_type)| *content_type)
    }

    /// The `Content-Type` header value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Html => "text/html",
            ContentType::Gif => "image/gif",
            ContentType::Jpeg => "image/jpeg",
            ContentType::Png => "image/png",
            // Not image/x-icon; clients of the old server expect this label.
            ContentType::Icon => "image/url-icon",
        }
    }
}

/// Whether the body for `path` is streamed untouched.
pub fn is_binary(path: &str) -> bool {
    BINARY_MARKERS.iter().any(|marker| path.contains(marker))
}
