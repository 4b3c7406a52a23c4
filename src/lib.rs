//! Minimal async HTTP server that answers every request with a two-line
//! greeting echoing the requested path.
//!
//! The binary in `main.rs` wires these modules together; they are exposed
//! as a library so integration tests can drive a real server instance.

pub mod config;
pub mod handler;
pub mod logger;
pub mod response;
pub mod server;
