//! Configuration module for filterspec.
//!
//! Handles the TOML settings file and environment variable expansion.

mod settings;

pub use settings::{
    expand_env_vars, Defaults, Settings, SettingsError, SqlSettings, CONFIG_ENV_VAR,
    CONFIG_FILE_NAME,
};
