//! Server configuration management

use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Primary-store connection string
    pub database_url: String,

    /// Path of the JSON file mirroring the template collection
    pub templates_file: String,

    /// Bound on a single primary-store call, in seconds
    pub primary_timeout_seconds: u64,

    /// Optical-recognition API endpoint
    pub vision_api_url: String,

    /// Optical-recognition API key
    pub vision_api_key: String,

    /// CORS allowed origins
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| ApiError::Config("Invalid PORT value".to_string()))?,
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:./data/rollcall.db".to_string()),
            templates_file: std::env::var("TEMPLATES_FILE")
                .unwrap_or_else(|_| "./data/templates.json".to_string()),
            primary_timeout_seconds: std::env::var("PRIMARY_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .map_err(|_| {
                    ApiError::Config("Invalid PRIMARY_TIMEOUT_SECONDS value".to_string())
                })?,
            vision_api_url: std::env::var("ZHIPU_API_URL").unwrap_or_else(|_| {
                "https://open.bigmodel.cn/api/paas/v4/chat/completions".to_string()
            }),
            vision_api_key: std::env::var("ZHIPU_API_KEY").unwrap_or_default(),
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_url: "sqlite:./data/rollcall.db".to_string(),
            templates_file: "./data/templates.json".to_string(),
            primary_timeout_seconds: 5,
            vision_api_url: "https://open.bigmodel.cn/api/paas/v4/chat/completions".to_string(),
            vision_api_key: String::new(),
            cors_origins: vec!["*".to_string()],
        }
    }
}
