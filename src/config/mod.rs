//! Configuration module for Tessera.
//!
//! Handles the config file, environment variables, and settings.

mod settings;

pub use settings::{
    expand_env_vars, ExplorerSettings, LoggingSettings, Settings, SettingsError, SourceSettings,
};
