//! Optional user configuration (stored in ~/.config/graphkit/config.toml)
//!
//! Every key is optional; a missing file yields the defaults and command-line
//! flags always take precedence over file values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::format::OutputFormat;

const CONFIG_DIR: &str = "graphkit";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRAPHKIT_CONFIG_DIR";

/// Seed used by `generate` when neither the flag nor the config file sets one
pub const DEFAULT_SEED: u64 = 0x5EED;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output format
    pub format: Option<OutputFormat>,
    /// Default random seed for graph generators
    pub seed: Option<u64>,
    /// Default log level (e.g. `debug` or a full filter directive)
    pub log_level: Option<String>,
}

impl Config {
    fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GraphError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from an explicit file; the file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GraphError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Load the user configuration, falling back to defaults when absent.
    pub fn discover() -> Result<Self> {
        let path = match Self::config_path() {
            Ok(path) => path,
            Err(_) => return Ok(Self::default()),
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load(&path)
    }

    /// Seed to use for generators: explicit value, then config, then default
    pub fn seed_or_default(&self, explicit: Option<u64>) -> u64 {
        explicit.or(self.seed).unwrap_or(DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.format, None);
        assert_eq!(config.seed_or_default(None), DEFAULT_SEED);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "format = \"json\"\nseed = 42\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_explicit_seed_wins() {
        let config = Config {
            seed: Some(7),
            ..Default::default()
        };
        assert_eq!(config.seed_or_default(Some(99)), 99);
        assert_eq!(config.seed_or_default(None), 7);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "format = [").unwrap();

        assert!(matches!(Config::load(&path), Err(GraphError::Toml(_))));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempdir().unwrap();
        assert!(Config::load(&dir.path().join("absent.toml")).is_err());
    }
}
