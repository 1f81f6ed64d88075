//! Configuration management
//!
//! Settings come from environment variables with built-in defaults.
//! A `.env` file is loaded by the server binary before this runs.

use serde::{Deserialize, Serialize};

use crate::ContactError;

/// Main configuration for the contacts service
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Port for the HTTP API server
    #[serde(default = "default_api_port")]
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: default_api_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path to the SQLite database file
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

fn default_api_port() -> u16 {
    3001
}

fn default_db_path() -> String {
    "contacts.db".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let port = match std::env::var("API_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ContactError::Config(format!("invalid API_PORT: {}", raw)))?,
            Err(_) => default_api_port(),
        };

        Ok(Config {
            api: ApiConfig { port },
            storage: StorageConfig {
                db_path: std::env::var("DB_PATH").unwrap_or_else(|_| default_db_path()),
            },
        })
    }
}
