//! Settings for the mdview viewer, stored as TOML under `~/.config/mdview`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory the viewer lists documents from and new documents are saved to.
    pub documents_path: PathBuf,
}

impl Config {
    pub fn config_path() -> PathBuf {
        PathBuf::from(shellexpand::tilde("~/.config/mdview").as_ref()).join("config.toml")
    }

    /// Reads the config from its default location.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Returns `Ok(None)` when no config file exists yet.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;
        Self::parse(&raw, config_path).map(Some)
    }

    fn parse(raw: &str, config_path: &Path) -> Result<Self, ConfigError> {
        let Config { documents_path } =
            toml::from_str(raw).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // `~` and `$VARS` are expanded; a path naming an unset variable is kept as written
        let expanded = shellexpand::full(&documents_path.to_string_lossy())
            .ok()
            .map(|p| PathBuf::from(p.as_ref()));
        Ok(Self {
            documents_path: expanded.unwrap_or(documents_path),
        })
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(dir) = config_path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(config_path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Writes a config pointing at `documents_path` unless one already exists
    /// at `config_path`. Returns whether a file was written.
    pub fn remember_documents_path(
        config_path: &Path,
        documents_path: &Path,
    ) -> anyhow::Result<bool> {
        if Self::load_from_path(config_path)?.is_some() {
            return Ok(false);
        }
        Self {
            documents_path: documents_path.to_path_buf(),
        }
        .save_to_path(config_path)?;
        Ok(true)
    }
}
