use crate::config::Config;
use crate::logger;
use crate::response;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Second line of every response body, identifying this service.
const APP_ID: &str = "APP 2";

/// Greeting body for a request path.
///
/// `path` comes from `Uri::path`, so it is already query-free and not
/// percent-decoded. The echo is verbatim.
pub fn greeting_body(path: &str) -> String {
    format!("Hello, you've requested: {path}\n{APP_ID}\n")
}

/// The single catch-all handler.
///
/// Every method on every path gets the same treatment: a 200 with the
/// two-line greeting. The request body is never touched, so this is
/// generic over the body type.
pub async fn handle_request<B>(
    req: Request<B>,
    peer_addr: SocketAddr,
    config: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let path = req.uri().path();
    let body = greeting_body(path);

    if config.logging.access_log {
        logger::log_access(&peer_addr, req.method(), path, req.version(), body.len());
    }

    Ok(response::build_greeting_response(body, &config.http))
}
