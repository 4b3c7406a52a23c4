use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    pub content_type: String,
}

impl Config {
    /// Load configuration from `config.toml` (optional) and `SERVER_*`
    /// environment variables, falling back to built-in defaults.
    ///
    /// The defaults reproduce the original deployment: listen on all
    /// interfaces, port 8000.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "app2-server/0.1")?
            .set_default("http.content_type", "text/plain; charset=utf-8")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_addr(host: &str, port: u16) -> Config {
        Config {
            server: ServerConfig {
                host: host.to_string(),
                port,
                workers: None,
            },
            logging: LoggingConfig { access_log: false },
            performance: PerformanceConfig {
                keep_alive_timeout: 75,
                read_timeout: 30,
                write_timeout: 30,
            },
            http: HttpConfig {
                server_name: "app2-server/0.1".to_string(),
                content_type: "text/plain; charset=utf-8".to_string(),
            },
        }
    }

    #[test]
    fn test_defaults_match_original_deployment() {
        let cfg = Config::load().expect("defaults should deserialize");
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8000);
        assert!(cfg.logging.access_log);
    }

    #[test]
    fn test_get_socket_addr() {
        let cfg = config_with_addr("127.0.0.1", 8000);
        let addr = cfg.get_socket_addr().expect("valid address");
        assert_eq!(addr.port(), 8000);
        assert!(addr.is_ipv4());
    }

    #[test]
    fn test_get_socket_addr_rejects_bad_host() {
        let cfg = config_with_addr("not a host", 8000);
        assert!(cfg.get_socket_addr().is_err());
    }
}
