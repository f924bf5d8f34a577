use crate::error::AppError;
use config::{Config as Cfg, Environment, File};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Settings shared by every component: identity and log verbosity.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_service_name() -> String {
    "billing-core".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            log_level: default_log_level(),
        }
    }
}

/// Load `T` from an optional `configuration.*` file in the working directory,
/// overridden by `APP__`-prefixed environment variables.
pub fn load<T: DeserializeOwned>() -> Result<T, AppError> {
    load_from("configuration")
}

/// Same as [`load`], reading the optional file from `file` (extension is
/// resolved by the `config` crate).
pub fn load_from<T: DeserializeOwned>(file: impl AsRef<Path>) -> Result<T, AppError> {
    dotenvy::dotenv().ok();

    let file = file.as_ref().to_string_lossy();
    let config = Cfg::builder()
        .add_source(File::with_name(&file).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_when_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let config: Config = load_from(dir.path().join("configuration")).unwrap();
        assert_eq!(config.service_name, "billing-core");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("configuration.toml"),
            "service_name = \"billing-worker\"\nlog_level = \"debug\"\n",
        )
        .unwrap();

        let config: Config = load_from(dir.path().join("configuration")).unwrap();
        assert_eq!(config.service_name, "billing-worker");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("configuration.toml"), "service_name = [").unwrap();

        let result: Result<Config, AppError> = load_from(dir.path().join("configuration"));
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }
}
