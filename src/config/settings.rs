//! TOML-based configuration for Tessera.
//!
//! Supports a config file (tessera.toml) with environment variable expansion.
//!
//! Example configuration:
//! ```toml
//! [source]
//! root = "${TESSERA_DATA}/backend"
//!
//! [explorer]
//! default_workspace = "ws-sales"
//!
//! [logging]
//! filter = "tessera=debug"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Where workspace, graph and schema documents are read from.
    pub source: SourceSettings,

    /// Explorer behaviour.
    pub explorer: ExplorerSettings,

    /// Logging configuration.
    pub logging: LoggingSettings,
}

/// Metadata source configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SourceSettings {
    /// Root directory of the JSON provider (supports ${ENV_VAR} expansion).
    pub root: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            root: ".".to_string(),
        }
    }
}

impl SourceSettings {
    /// Get the root directory with environment variables expanded.
    pub fn resolved_root(&self) -> Result<PathBuf, SettingsError> {
        let expanded = expand_env_vars(&self.root)?;
        if expanded.trim().is_empty() {
            return Err(SettingsError::InvalidConfig(
                "source.root must not be empty".to_string(),
            ));
        }
        Ok(PathBuf::from(expanded))
    }
}

/// Explorer configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ExplorerSettings {
    /// Workspace selected on first load, if the backend lists it.
    pub default_workspace: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// env_logger filter used when RUST_LOG is not set.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `TESSERA_CONFIG`
    /// 2. `./tessera.toml`
    /// 3. `~/.config/tessera/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var("TESSERA_CONFIG") {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("tessera.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("tessera").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        // Return defaults if no config file found
        Ok(Settings::default())
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR` syntax. A lone `$` is kept as-is.
pub fn expand_env_vars(s: &str) -> Result<String, SettingsError> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }

        let var_name: String = if chars.next_if_eq(&'{').is_some() {
            chars.by_ref().take_while(|&ch| ch != '}').collect()
        } else {
            let mut name = String::new();
            while let Some(ch) = chars.next_if(|ch| ch.is_alphanumeric() || *ch == '_') {
                name.push(ch);
            }
            if name.is_empty() {
                result.push('$');
                continue;
            }
            name
        };

        let value =
            env::var(&var_name).map_err(|_| SettingsError::MissingEnvVar(var_name.clone()))?;
        result.push_str(&value);
    }

    Ok(result)
}
