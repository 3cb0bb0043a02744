use crate::cli::{Cli, StorageBackend};
use anyhow::{Context, Result};
use homescout_core::config::{CliConfigOverrides, LayeredConfig};
use homescout_core::Predictor;
use std::env;

/// Resolve configuration from defaults, config file, environment and CLI flags
pub fn resolve(cli: &Cli) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();

    let file = cli
        .config
        .clone()
        .or_else(|| env::var_os("HOMESCOUT_CONFIG").map(Into::into));
    if let Some(path) = file {
        config = config
            .load_from_file(&path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?;
    }

    let mut config = config.load_from_env();
    config.update_from_cli(CliConfigOverrides {
        model_path: cli.model.clone(),
        columns_path: cli.columns.clone(),
        ..Default::default()
    });

    Ok(config)
}

/// Pick the search log backend: explicit flag first, then postgres if a database URL is configured
pub fn storage_backend(cli: &Cli, config: &LayeredConfig) -> StorageBackend {
    match cli.storage {
        Some(backend) => backend,
        None if config.database_url.value.is_some() => StorageBackend::Postgres,
        None => StorageBackend::Memory,
    }
}

/// Load the predictor from the configured artifacts
pub fn load_predictor(config: &LayeredConfig) -> Result<Predictor> {
    let predictor = Predictor::load(&config.model_path.value, &config.columns_path.value)?;
    Ok(predictor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_storage_flag_wins() {
        let cli = Cli::parse_from(["homescout", "--storage", "memory", "options"]);
        let mut config = LayeredConfig::with_defaults();
        config.update_from_cli(CliConfigOverrides {
            database_url: Some("postgresql://localhost/homescout".to_string()),
            ..Default::default()
        });

        assert_eq!(storage_backend(&cli, &config), StorageBackend::Memory);
    }

    #[test]
    fn test_storage_follows_database_url() {
        let cli = Cli::parse_from(["homescout", "options"]);

        let config = LayeredConfig::with_defaults();
        assert_eq!(storage_backend(&cli, &config), StorageBackend::Memory);

        let mut config = LayeredConfig::with_defaults();
        config.update_from_cli(CliConfigOverrides {
            database_url: Some("postgresql://localhost/homescout".to_string()),
            ..Default::default()
        });
        assert_eq!(storage_backend(&cli, &config), StorageBackend::Postgres);
    }

    #[test]
    fn test_artifact_flags_override_defaults() {
        let cli = Cli::parse_from([
            "homescout",
            "--model",
            "/tmp/model.json",
            "--columns",
            "/tmp/columns.json",
            "options",
        ]);
        let mut config = LayeredConfig::with_defaults();
        config.update_from_cli(CliConfigOverrides {
            model_path: cli.model.clone(),
            columns_path: cli.columns.clone(),
            ..Default::default()
        });

        assert_eq!(config.model_path.value.to_str(), Some("/tmp/model.json"));
        assert_eq!(config.columns_path.value.to_str(), Some("/tmp/columns.json"));
    }
}
