//! Configuration for the frontend service

use std::env;

pub const DEFAULT_BACKEND_URL: &str = "http://backend-service:5001";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the backend service
    pub backend_url: String,

    /// Interface to bind
    pub host: String,

    /// Port to listen on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(backend_url) = lookup("BACKEND_URL") {
            config.backend_url = backend_url.trim().trim_end_matches('/').to_string();
        }

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }

        if let Some(port) = lookup("PORT") {
            if let Ok(port) = port.trim().parse() {
                config.port = port;
            }
        }

        config
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.backend_url.is_empty() {
            return Err("backend_url cannot be empty".to_string());
        }

        if !self.backend_url.starts_with("http://") && !self.backend_url.starts_with("https://") {
            return Err(format!(
                "backend_url must start with http:// or https://, got {}",
                self.backend_url
            ));
        }

        if self.host.trim().is_empty() {
            return Err("host cannot be empty".to_string());
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
