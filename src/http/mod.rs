//! HTTP protocol implementation.
//!
//! A deliberately small subset of HTTP/1.1: one `GET` per connection, no
//! keep-alive, no Content-Length, the connection close marks the end of
//! the body.
//!
//! # Architecture
//!
//! - **`connection`**: the per-connection worker and its state machine
//! - **`parser`**: reads the header block and pulls out the request path
//! - **`request`**: the parsed request (just the path)
//! - **`mime`**: content type and binary/text dispatch by path substring
//! - **`response`**: status codes and the header block
//! - **`content`**: body production (binary, substituted text, 404 fallback)
//! - **`writer`**: writes serialized chunks to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Read lines until the blank line, EOF or error
//!        └──────┬──────┘
//!               │ Request (possibly empty path)
//!               ▼
//!        ┌──────────────────┐
//!        │   Responding     │ ← Header block, then body
//!        └──────┬───────────┘
//!               │ Body written, stream shut down
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │
//!        └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use webworker::config::Config;
//! use webworker::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cfg = Arc::new(Config::default());
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let cfg = Arc::clone(&cfg);
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, cfg);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod content;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
