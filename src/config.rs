//! Server configuration.
//!
//! Settings come from an optional YAML file (named by the `CONFIG`
//! environment variable) and are then overridden by `LISTEN` and
//! `DOC_ROOT` when those are set. Every field has a default, so an empty
//! file or no file at all yields a working server rooted at the current
//! directory.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticConfig,
}

/// Listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the accept loop binds to
    pub listen_addr: String,

    /// Optional deadline for each request line read, in milliseconds.
    /// Unset means reads block until the client sends or hangs up.
    pub read_timeout_ms: Option<u64>,
}

/// Everything a worker needs to answer a request.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticConfig {
    /// Directory request paths are resolved against
    pub root: PathBuf,

    /// Page appended to the 404 body, relative to the working directory
    pub fallback_page: PathBuf,

    /// Value of the `Server:` response header
    pub server_header: String,

    /// Text that replaces the server placeholder in served pages
    pub server_tag_text: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            read_timeout_ms: None,
        }
    }
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            fallback_page: PathBuf::from("error404.html"),
            server_header: "Tony's very own server".to_string(),
            server_tag_text: "Tony's super cool and functional server".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `CONFIG` (if set) and apply env overrides.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("CONFIG") {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };

        if let Ok(listen_addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = listen_addr;
        }
        if let Ok(root) = std::env::var("DOC_ROOT") {
            cfg.static_files.root = PathBuf::from(root);
        }

        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&text)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        // An empty document deserializes to null, not to an empty mapping.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }
}

impl ServerConfig {
    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout_ms.map(Duration::from_millis)
    }
}

impl StaticConfig {
    /// Map a request path onto the filesystem below the document root.
    ///
    /// Leading slashes are dropped so the path always joins under `root`.
    /// No normalization happens beyond that: `..` segments pass through.
    pub fn resolve(&self, request_path: &str) -> PathBuf {
        self.root.join(request_path.trim_start_matches('/'))
    }
}
