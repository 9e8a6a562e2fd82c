//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::output::OutputFormat;

/// Environment variable that points at an alternate config file.
pub const CONFIG_ENV: &str = "MEMO_CONFIG";

/// Prompt shown before each command in interactive sessions.
pub const DEFAULT_PROMPT: &str = "memo> ";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default output format for listings
    pub format: Option<OutputFormat>,

    /// Session prompt
    pub prompt: Option<String>,

    /// Log filter used when neither RUST_LOG nor -v is given
    pub log: Option<String>,

    /// Re-render the list after every change
    pub live: Option<bool>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// `$MEMO_CONFIG` if set, otherwise `~/.config/memo/config.toml`.
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("memo")
            .join("config.toml")
    }

    /// Resolve the output format, with CLI argument taking precedence.
    pub fn format(&self, cli_format: Option<OutputFormat>) -> OutputFormat {
        cli_format.or(self.format).unwrap_or_default()
    }

    pub fn prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    /// The `--live` flag wins; the config can only turn live mode on.
    pub fn live(&self, cli_live: bool) -> bool {
        cli_live || self.live.unwrap_or(false)
    }
}
