//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Locations of the persistent stores.
    pub stores: StoreConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Locations of the resource and prompt stores. Both directories are created
/// on startup if absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding resource files (`<id>.json`).
    pub resources_dir: PathBuf,

    /// Directory holding prompt records (`<id>.json`).
    pub prompts_dir: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "word-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            stores: StoreConfig {
                resources_dir: PathBuf::from("resources"),
                prompts_dir: PathBuf::from("prompts"),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Recognized variables: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `MCP_RESOURCES_DIR`, `MCP_PROMPTS_DIR`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(dir) = std::env::var("MCP_RESOURCES_DIR") {
            config.stores.resources_dir = PathBuf::from(dir);
        }

        if let Ok(dir) = std::env::var("MCP_PROMPTS_DIR") {
            config.stores.prompts_dir = PathBuf::from(dir);
        }

        config
    }
}
