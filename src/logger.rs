//! Logging utilities for the greeting server.
//!
//! Plain stdout/stderr logging: a startup banner, per-connection and
//! per-request access lines, and error/warning output. Access lines use
//! a Common Log Format style timestamp.

use crate::config::Config;
use chrono::{DateTime, Local};
use hyper::{Method, Version};
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Async server started successfully");
    println!("Listening on: http://{addr}");
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

/// Format one access line in Common Log Format style.
///
/// Every response this server produces is a 200, so the status field
/// is fixed.
pub fn access_line(
    peer_addr: &SocketAddr,
    time: &DateTime<Local>,
    method: &Method,
    path: &str,
    version: Version,
    body_bytes: usize,
) -> String {
    format!(
        "{} - - [{}] \"{} {} {:?}\" 200 {}",
        peer_addr.ip(),
        time.format("%d/%b/%Y:%H:%M:%S %z"),
        method,
        path,
        version,
        body_bytes,
    )
}

pub fn log_access(
    peer_addr: &SocketAddr,
    method: &Method,
    path: &str,
    version: Version,
    body_bytes: usize,
) {
    println!(
        "{}",
        access_line(peer_addr, &Local::now(), method, path, version, body_bytes)
    );
}
