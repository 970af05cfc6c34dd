//! Configuration loading and management

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_mongodb_uri() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_database() -> String {
    "studentdb".to_string()
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Socket address to bind (e.g., "127.0.0.1:3000")
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

/// Document store connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// MongoDB connection string
    #[serde(default = "default_mongodb_uri")]
    pub uri: String,

    /// Database name holding the students collection
    #[serde(default = "default_database")]
    pub database: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: default_mongodb_uri(),
            database: default_database(),
        }
    }
}

/// Complete configuration for the roster service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub database: DatabaseConfig,
}

impl ServiceConfig {
    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            message: format!("{}: {}", path, e),
        })?;
        serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
            file: Some(path.to_string()),
            message: e.to_string(),
        })
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration for the running process.
    ///
    /// Starts from the file named by `ROSTER_CONFIG` when set, otherwise
    /// from defaults, then applies environment variable overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var("ROSTER_CONFIG") {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Apply environment variable overrides:
    /// `ROSTER_BIND_ADDR`, `ROSTER_MONGODB_URI`, `ROSTER_MONGODB_DATABASE`.
    pub fn apply_env(&mut self) {
        if let Ok(bind_addr) = std::env::var("ROSTER_BIND_ADDR") {
            self.http.bind_addr = bind_addr;
        }
        if let Ok(uri) = std::env::var("ROSTER_MONGODB_URI") {
            self.database.uri = uri;
        }
        if let Ok(database) = std::env::var("ROSTER_MONGODB_DATABASE") {
            self.database.database = database;
        }
    }
}
