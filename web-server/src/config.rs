//! Configuration module

use std::env;

use energy_core::constants;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Trained ONNX model
    pub model_path: String,

    /// JSON sidecar declaring the model's input columns
    pub metadata_path: String,

    /// Bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// "text" or "json"
    pub log_format: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let model_path = constants::get_model_path();
        let metadata_path = constants::get_metadata_path(&model_path);

        Self {
            model_path,
            metadata_path,

            host: env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),

            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),

            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "text".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}
