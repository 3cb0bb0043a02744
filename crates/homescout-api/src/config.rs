use std::env;
use std::path::PathBuf;

use homescout_core::config::LayeredConfig;
use homescout_core::error::Result;

/// API server configuration
///
/// Resolved from defaults, an optional TOML file named by `HOMESCOUT_CONFIG`,
/// then environment variables.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_origin: String,
    pub database_url: Option<String>,
    pub model_path: PathBuf,
    pub columns_path: PathBuf,
}

impl ApiConfig {
    /// Load configuration from the config file (if any) and environment variables
    pub fn load() -> Result<Self> {
        let mut layered = LayeredConfig::with_defaults();
        if let Ok(path) = env::var("HOMESCOUT_CONFIG") {
            layered = layered.load_from_file(path)?;
        }
        Ok(Self::from_layered(layered.load_from_env()))
    }

    pub fn from_layered(config: LayeredConfig) -> Self {
        Self {
            port: config.port.value,
            cors_origin: config.cors_origin.value,
            database_url: config.database_url.value,
            model_path: config.model_path.value,
            columns_path: config.columns_path.value,
        }
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Check if PostgreSQL storage is configured
    pub fn uses_postgres(&self) -> bool {
        self.database_url.is_some()
    }
}
