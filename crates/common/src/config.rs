use crate::error::GatewayError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Paragen application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Ollama API base URL
    pub ollama_base_url: String,

    /// Model used when a request does not name one
    pub default_model: String,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Directory holding the front-end page (index.html)
    pub static_dir: PathBuf,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ollama_base_url: "http://localhost:11434".to_string(),
            default_model: "llama2".to_string(),
            server_host: "0.0.0.0".to_string(),
            server_port: 5000,
            static_dir: PathBuf::from("./templates"),
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, GatewayError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let defaults = Self::default();

        let config = Self {
            ollama_base_url: std::env::var("OLLAMA_BASE_URL")
                .unwrap_or(defaults.ollama_base_url),
            default_model: std::env::var("DEFAULT_MODEL")
                .unwrap_or(defaults.default_model),
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or(defaults.server_host),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.server_port),
            static_dir: Self::get_env_path("STATIC_DIR")
                .unwrap_or(defaults.static_dir),
            log_dir: Self::get_env_path("LOG_DIR")
                .unwrap_or(defaults.log_dir),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or(defaults.log_level),
        };

        config.validate()?;

        Ok(config)
    }

    /// Get PathBuf from environment variable
    fn get_env_path(key: &str) -> Option<PathBuf> {
        std::env::var(key).ok().map(PathBuf::from)
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Path of the front-end page
    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), GatewayError> {
        if !self.ollama_base_url.starts_with("http://")
            && !self.ollama_base_url.starts_with("https://") {
            return Err(GatewayError::config(
                "Ollama base URL must start with http:// or https://"
            ));
        }

        if self.default_model.trim().is_empty() {
            return Err(GatewayError::config("Default model name cannot be empty"));
        }

        if self.server_port == 0 {
            return Err(GatewayError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}
