//! TOML-based configuration for filterspec.
//!
//! Supports a config file (filterspec.toml) with environment variable
//! expansion applied to the whole file before parsing.
//!
//! Example configuration:
//! ```toml
//! [sql]
//! dialect = "${FILTERSPEC_DIALECT}"
//! distinct = true
//!
//! [defaults]
//! null_handling = "match_nullity"
//! ignore_case = true
//! like_pattern = "suffix_open"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::spec::{LikePattern, NullHandling};
use crate::sql::Dialect;

/// File name looked up by [`Settings::load`].
pub const CONFIG_FILE_NAME: &str = "filterspec.toml";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "FILTERSPEC_CONFIG";

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
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// SQL rendering.
    pub sql: SqlSettings,

    /// Defaults applied by [`crate::filters::Filters`].
    pub defaults: Defaults,
}

/// SQL rendering settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SqlSettings {
    /// Target dialect (postgres, duckdb, mysql, tsql, sqlite).
    pub dialect: Dialect,

    /// Emit `SELECT DISTINCT`. Useful when filtering through one-to-many
    /// associations, which repeat root rows.
    pub distinct: bool,
}

/// Leaf defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Defaults {
    /// Null policy for Equal / NotEqual.
    pub null_handling: NullHandling,

    /// Case-insensitive text comparison for Equal / NotEqual / Like.
    pub ignore_case: bool,

    /// Wildcard placement for Like.
    pub like_pattern: LikePattern,
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse settings from TOML text, expanding environment variables first.
    ///
    /// An unset variable referenced outside a full-line comment is an error
    /// ([`SettingsError::MissingEnvVar`]).
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        let expanded = expand_env_vars(content)?;
        let settings: Settings = toml::from_str(&expanded)?;
        Ok(settings)
    }

    /// Load settings for a project directory.
    ///
    /// Searches in order:
    /// 1. Environment variable `FILTERSPEC_CONFIG`
    /// 2. `<dir>/filterspec.toml`
    ///
    /// Returns defaults if neither exists.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, SettingsError> {
        if let Ok(path) = env::var(CONFIG_ENV_VAR) {
            return Self::from_file(&path);
        }

        let local_config = dir.as_ref().join(CONFIG_FILE_NAME);
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        Ok(Settings::default())
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR` syntax. A `$` not followed by a name is kept.
/// Full-line `#` comments are copied untouched; a trailing comment after a
/// value is still expanded.
pub fn expand_env_vars(s: &str) -> Result<String, SettingsError> {
    let mut result = String::with_capacity(s.len());
    for line in s.split_inclusive('\n') {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
        } else {
            expand_line(line, &mut result)?;
        }
    }
    Ok(result)
}

fn expand_line(line: &str, result: &mut String) -> Result<(), SettingsError> {
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }

        let var_name: String = if chars.next_if_eq(&'{').is_some() {
            // ${VAR}: everything up to the closing brace
            chars.by_ref().take_while(|&ch| ch != '}').collect()
        } else {
            // $VAR: ends at non-alphanumeric/underscore
            let mut name = String::new();
            while let Some(ch) = chars.next_if(|&ch| ch.is_alphanumeric() || ch == '_') {
                name.push(ch);
            }
            if name.is_empty() {
                result.push('$');
                continue;
            }
            name
        };

        let value = env::var(&var_name).map_err(|_| SettingsError::MissingEnvVar(var_name))?;
        result.push_str(&value);
    }

    Ok(())
}
