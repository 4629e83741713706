//! CLI configuration
//!
//! Sources, later ones winning:
//! 1. built-in defaults
//! 2. `texkit.toml` in the working directory, or the file given with `--config`
//! 3. `TEXKIT_*` environment variables, `__` between sections
//!    (e.g. `TEXKIT_PREPROCESS__MAX_BUFFER=8192`, `TEXKIT_LOGGING__JSON=true`)

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use texkit_preprocess::PreprocessOptions;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub preprocess: PreprocessOptions,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter level when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON log lines instead of human-readable ones.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path),
            None => config::File::with_name("texkit").required(false),
        };

        config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("TEXKIT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration sources")?
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.preprocess.max_buffer == 0 {
            anyhow::bail!("preprocess.max_buffer must be greater than zero");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_library_limits() {
        let config = Config::default();
        assert_eq!(config.preprocess, PreprocessOptions::default());
        assert_eq!(config.logging.level, "warn");
        assert!(!config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_buffer_is_rejected() {
        let mut config = Config::default();
        config.preprocess.max_buffer = 0;
        assert!(config.validate().is_err());
    }
}
