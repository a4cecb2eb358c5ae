use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::schedule::DEFAULT_REMINDER_LIMIT;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct RapportConfig {
    pub logging: LoggingConfig,
    pub input: InputConfig,
    pub reminders: ReminderConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct InputConfig {
    /// Connections exported from the backend, as JSON.
    pub connections_file: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ReminderConfig {
    /// How many smart reminders to surface.
    pub limit: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".into(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        let connections_file = default_rapport_dir()
            .join("connections.json")
            .to_string_lossy()
            .into_owned();
        Self { connections_file }
    }
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_REMINDER_LIMIT,
        }
    }
}

/// Returns `~/.rapport/`, or `./.rapport/` when no home directory is known.
pub fn default_rapport_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".rapport")
}

/// Returns the default config file path: `~/.rapport/config.toml`
pub fn default_config_path() -> PathBuf {
    default_rapport_dir().join("config.toml")
}

impl RapportConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            RapportConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    /// (RAPPORT_LOG_LEVEL, RAPPORT_CONNECTIONS, RAPPORT_REMINDER_LIMIT).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("RAPPORT_LOG_LEVEL") {
            self.logging.log_level = val;
        }
        if let Ok(val) = std::env::var("RAPPORT_CONNECTIONS") {
            self.input.connections_file = val;
        }
        if let Ok(val) = std::env::var("RAPPORT_REMINDER_LIMIT") {
            match val.parse() {
                Ok(limit) => self.reminders.limit = limit,
                Err(_) => warn!(value = %val, "ignoring non-numeric RAPPORT_REMINDER_LIMIT"),
            }
        }
    }

    /// Resolve the connections file path, expanding `~` if needed.
    pub fn resolved_connections_path(&self) -> PathBuf {
        expand_tilde(&self.input.connections_file)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
