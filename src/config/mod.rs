use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use crate::errors::WikiError;

/// Title the root path redirects to
pub const DEFAULT_TITLE: &str = "FrontPage";

/// Application configuration and constants
pub struct Config {
    pub data_dir: Arc<PathBuf>,
    pub template_dir: Arc<PathBuf>,
    pub port: u16,
    pub host: String,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            data_dir: Arc::new(PathBuf::from("data")),
            template_dir: Arc::new(PathBuf::from("tmpl")),
            port: 8080,
            host: "0.0.0.0".to_string(),
        }
    }

    /// Create configuration with custom values
    pub fn with_custom(
        data_dir: PathBuf,
        template_dir: PathBuf,
        port: Option<u16>,
        host: Option<String>,
    ) -> Self {
        Self {
            data_dir: Arc::new(data_dir),
            template_dir: Arc::new(template_dir),
            port: port.unwrap_or(8080),
            host: host.unwrap_or_else(|| "0.0.0.0".to_string()),
        }
    }

    /// Get the socket address for binding
    pub fn socket_addr(&self) -> Result<SocketAddr, WikiError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| WikiError::ConfigError(format!("invalid host '{}': {}", self.host, e)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.data_dir.as_path(), std::path::Path::new("data"));
        assert_eq!(config.template_dir.as_path(), std::path::Path::new("tmpl"));
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn custom_host_and_port() {
        let config = Config::with_custom(
            PathBuf::from("pages"),
            PathBuf::from("views"),
            Some(9000),
            Some("127.0.0.1".to_string()),
        );
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn bad_host_is_config_error() {
        let config =
            Config::with_custom(PathBuf::new(), PathBuf::new(), None, Some("nowhere".into()));
        assert!(matches!(config.socket_addr(), Err(WikiError::ConfigError(_))));
    }
}
