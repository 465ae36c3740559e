//! Network entry point: binds the listener and hands each accepted socket
//! to its own worker.

pub mod listener;
