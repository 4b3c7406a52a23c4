use crate::config::HttpConfig;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build the 200 plain-text response carrying the greeting body.
pub fn build_greeting_response(body: String, http_config: &HttpConfig) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", &http_config.content_type)
        .header("Server", &http_config.server_name)
        .body(Full::new(Bytes::from(body)))
        .expect("Failed to build response")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_http_config() -> HttpConfig {
        HttpConfig {
            server_name: "app2-server/0.1".to_string(),
            content_type: "text/plain; charset=utf-8".to_string(),
        }
    }

    #[test]
    fn test_greeting_response_status_and_headers() {
        let resp = build_greeting_response("hello\n".to_string(), &test_http_config());
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "text/plain; charset=utf-8"
        );
        assert_eq!(resp.headers().get("Server").unwrap(), "app2-server/0.1");
    }
}
