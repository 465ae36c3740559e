/// The only request verb the worker recognizes.
pub const VERB: &str = "GET";

/// What the worker keeps of an incoming request.
///
/// Method, headers and body are read off the wire and discarded; only the
/// path from the request line survives. A request whose stream never
/// produced a recognizable request line has an empty path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// The request path exactly as sent (e.g. "/index.html")
    pub path: String,
}

impl Request {
    /// True when no request line was recognized.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}
