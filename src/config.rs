use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::context::{DEFAULT_LIMIT, DEFAULT_OFFSET};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read converter config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid converter config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Converter configuration.
///
/// - `default_limit` / `default_offset` apply when a query carries neither
///   LIMIT nor TOP.
/// - `aggregation_functions` adds names to the built-in aggregation list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    pub default_limit: i64,
    pub default_offset: i64,
    pub aggregation_functions: Vec<String>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            default_offset: DEFAULT_OFFSET,
            aggregation_functions: vec![],
        }
    }
}

impl ConverterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_limit(mut self, limit: i64) -> Self {
        self.default_limit = limit;
        self
    }

    pub fn with_aggregation(mut self, name: &str) -> Self {
        self.aggregation_functions.push(name.to_string());
        self
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
