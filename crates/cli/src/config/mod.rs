// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading for `occurs.toml`.
//!
//! Every field is optional. Command-line flags override what is loaded here.

pub mod defaults;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Supported config schema version.
pub const CONFIG_VERSION: u32 = 1;

/// Keys recognized in `occurs.toml`, with the keys recognized inside each table.
const KNOWN_KEYS: &[(&str, &[&str])] = &[
    ("version", &[]),
    ("data", &["path", "id_column", "value_column"]),
    ("search", &["ignore_case"]),
    ("generate", &["count", "length", "alphabet"]),
];

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(
        "unsupported config version {version} in {} (expected {})",
        path.display(),
        CONFIG_VERSION
    )]
    UnsupportedVersion { path: PathBuf, version: u32 },

    #[error("{field} must name a column")]
    EmptyColumn { field: &'static str },
}

/// Parsed `occurs.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Schema version.
    pub version: u32,

    /// Record store settings.
    pub data: DataConfig,

    /// Search settings.
    pub search: SearchConfig,

    /// Record generation settings.
    pub generate: GenerateConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            data: DataConfig::default(),
            search: SearchConfig::default(),
            generate: GenerateConfig::default(),
        }
    }
}

/// Location and column layout of the CSV record store.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// CSV file holding the records.
    pub path: PathBuf,

    /// Header of the identifier column.
    pub id_column: String,

    /// Header of the searchable text column.
    pub value_column: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(defaults::data::PATH),
            id_column: defaults::data::ID_COLUMN.to_string(),
            value_column: defaults::data::VALUE_COLUMN.to_string(),
        }
    }
}

/// Search settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Match keywords regardless of case.
    pub ignore_case: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { ignore_case: defaults::search::IGNORE_CASE }
    }
}

/// Record generation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Number of records to write.
    pub count: usize,

    /// Characters per value.
    pub length: usize,

    /// Characters to draw values from.
    pub alphabet: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            count: defaults::generate::COUNT,
            length: defaults::generate::LENGTH,
            alphabet: defaults::generate::ALPHABET.to_string(),
        }
    }
}

/// Parse config content. `path` is used for error messages only.
pub fn parse(content: &str, path: &Path) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)
        .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
    validate(&config, path)?;
    Ok(config)
}

/// Load a config file, printing a warning for each unknown key.
///
/// A relative `data.path` is resolved against the directory holding the
/// config file, so the same store is found from any working directory.
pub fn load_with_warnings(path: &Path) -> Result<Config, ConfigError> {
    let content = read(path)?;
    for key in unknown_keys(&content) {
        eprintln!("occurs: warning: unknown key `{}` in {}", key, path.display());
    }
    let mut config = parse(&content, path)?;
    if let Some(dir) = path.parent() {
        config.data.path = dir.join(&config.data.path);
    }
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Keys not recognized by this version, as dotted paths (`search.ignorecase`).
///
/// Content that fails to parse yields no keys; `parse` reports the error.
pub fn unknown_keys(content: &str) -> Vec<String> {
    let Ok(table) = toml::from_str::<toml::Table>(content) else {
        return Vec::new();
    };

    let mut unknown = Vec::new();
    for (key, value) in &table {
        let Some((_, nested)) = KNOWN_KEYS.iter().find(|(known, _)| *known == key.as_str()) else {
            unknown.push(key.clone());
            continue;
        };
        // A non-table value here is a type error, left to `parse`.
        if let toml::Value::Table(section) = value {
            unknown.extend(
                section
                    .keys()
                    .filter(|inner| !nested.contains(&inner.as_str()))
                    .map(|inner| format!("{key}.{inner}")),
            );
        }
    }
    unknown
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })
}

fn validate(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if config.version != CONFIG_VERSION {
        return Err(ConfigError::UnsupportedVersion {
            path: path.to_path_buf(),
            version: config.version,
        });
    }
    if config.data.id_column.is_empty() {
        return Err(ConfigError::EmptyColumn { field: "data.id_column" });
    }
    if config.data.value_column.is_empty() {
        return Err(ConfigError::EmptyColumn { field: "data.value_column" });
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
