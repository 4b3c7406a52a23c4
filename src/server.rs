//! Listener construction and the accept loop.
//!
//! Each accepted connection is served on its own Tokio task with an
//! HTTP/1.1 connection from hyper, bounded by the configured read/write
//! timeout.

use crate::config::Config;
use crate::handler;
use crate::logger;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};

/// Create a `TcpListener` bound to `addr`.
///
/// `SO_REUSEADDR` is enabled so the port can be rebound while old
/// connections sit in TIME_WAIT. An address with an active listener
/// still fails to bind, so a second instance on the same port dies at
/// startup.
pub fn create_listener(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;

    // Non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

/// Accept connections forever.
///
/// Accept errors are logged and the loop continues; there is no shutdown
/// path. The process ends only by external signal.
pub async fn run(listener: TcpListener, config: Arc<Config>) -> Result<(), std::io::Error> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                if config.logging.access_log {
                    logger::log_connection_accepted(&peer_addr);
                }
                handle_connection(stream, peer_addr, Arc::clone(&config));
            }
            Err(e) => {
                logger::log_warning(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}

/// Serve a single connection in a spawned task.
///
/// Wraps the stream in `TokioIo`, configures HTTP/1.1 keep-alive from the
/// performance settings, and applies an overall connection timeout.
fn handle_connection(stream: TcpStream, peer_addr: SocketAddr, config: Arc<Config>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let keep_alive_timeout = config.performance.keep_alive_timeout;
        let timeout_duration = std::time::Duration::from_secs(std::cmp::max(
            config.performance.read_timeout,
            config.performance.write_timeout,
        ));

        let mut builder = http1::Builder::new();
        if keep_alive_timeout > 0 {
            builder.keep_alive(true);
        }

        let service_config = Arc::clone(&config);
        let conn = builder.serve_connection(
            io,
            service_fn(move |req| {
                let config = Arc::clone(&service_config);
                async move { handler::handle_request(req, peer_addr, config).await }
            }),
        );

        match tokio::time::timeout(timeout_duration, conn).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => logger::log_connection_error(&err),
            Err(_) => {
                logger::log_warning(&format!(
                    "Connection from {peer_addr} timed out after {} seconds",
                    timeout_duration.as_secs()
                ));
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_listener_binds_ephemeral_port() {
        let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
        let listener = create_listener(addr).expect("bind ephemeral port");
        let local = listener.local_addr().unwrap();
        assert_ne!(local.port(), 0);
    }

    #[tokio::test]
    async fn test_second_listener_on_same_port_fails() {
        let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
        let first = create_listener(addr).expect("bind ephemeral port");
        let taken = first.local_addr().unwrap();

        let second = create_listener(taken);
        let err = second.expect_err("second bind on an active port must fail");
        assert_eq!(err.kind(), std::io::ErrorKind::AddrInUse);
    }
}
