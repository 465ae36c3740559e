//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use webworker::config::Config;
use webworker::http::connection::Connection;

pub const FALLBACK_PAGE: &str = "<h1>404</h1>\n";

/// A fresh directory under the system temp dir, unique per test name.
pub fn fixture_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("webworker-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Config rooted at `root/site` with the fallback page at `root/error404.html`.
pub fn site_config(root: &Path) -> Config {
    let site = root.join("site");
    std::fs::create_dir_all(&site).unwrap();

    let fallback = root.join("error404.html");
    std::fs::write(&fallback, FALLBACK_PAGE).unwrap();

    let mut cfg = Config::default();
    cfg.static_files.root = site;
    cfg.static_files.fallback_page = fallback;
    cfg
}

/// Drive one worker over an in-memory stream.
///
/// Returns the worker's result and every byte the client received.
pub async fn exchange(cfg: Config, request: &[u8], close_after_send: bool) -> (anyhow::Result<()>, Vec<u8>) {
    let (mut client, server) = tokio::io::duplex(64 * 1024);

    let worker = tokio::spawn(async move {
        let mut conn = Connection::new(server, Arc::new(cfg));
        conn.run().await
    });

    client.write_all(request).await.unwrap();
    if close_after_send {
        client.shutdown().await.unwrap();
    }

    let mut response = Vec::new();
    client.read_to_end(&mut response).await.unwrap();

    (worker.await.unwrap(), response)
}

/// Split a raw response at the blank line into (header text, body bytes).
pub fn split_response(raw: &[u8]) -> (String, Vec<u8>) {
    let pos = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response has no header terminator");
    let head = String::from_utf8(raw[..pos + 2].to_vec()).unwrap();
    (head, raw[pos + 4..].to_vec())
}

pub fn header_lines(head: &str) -> Vec<&str> {
    head.split("\r\n").filter(|l| !l.is_empty()).collect()
}
