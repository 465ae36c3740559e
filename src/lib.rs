//! Webworker - a minimal static-file HTTP server
//!
//! Every accepted connection gets its own worker, which reads one request,
//! writes one response and closes the connection.

pub mod config;
pub mod http;
pub mod server;
