//! Policy configuration.
//!
//! The free functions in this crate have fixed behavior. [`KitConfig`]
//! selects how the [`Toolkit`](crate::Toolkit) facade treats the two
//! degenerate cases those functions do not cover:
//!
//! - reducing an empty collection without an initial value
//! - asking a mapping for positional elements (`first_n` / `last_n`)
//!
//! Configuration is read from TOML:
//!
//! ```toml
//! empty_reduce = "error"
//! mapping_positions = "values"
//! ```

use crate::error::{ErrorCode, KitError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Outcome of reducing an empty collection with no initial value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyReducePolicy {
    /// Return `Ok(None)`
    #[default]
    Sentinel,
    /// Return `Err(KitError::EmptyReduce)`
    Error,
}

/// Behavior of positional helpers when handed a mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingPositionPolicy {
    /// Fail with `KitError::ShapeMismatch`
    #[default]
    Reject,
    /// Treat the mapping's value enumeration as the sequence
    Values,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KitConfig {
    pub empty_reduce: EmptyReducePolicy,
    pub mapping_positions: MappingPositionPolicy,
}

impl KitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_empty_reduce(mut self, policy: EmptyReducePolicy) -> Self {
        self.empty_reduce = policy;
        self
    }

    pub fn with_mapping_positions(mut self, policy: MappingPositionPolicy) -> Self {
        self.mapping_positions = policy;
        self
    }

    /// Parse configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, KitError> {
        let config: Self = toml::from_str(content).map_err(|e| {
            KitError::config_with_code(
                ErrorCode::CONFIG_PARSE_ERROR,
                "Failed to parse collection-kit configuration",
            )
            .with_source(e)
        })?;
        debug!(
            empty_reduce = ?config.empty_reduce,
            mapping_positions = ?config.mapping_positions,
            "Parsed collection-kit configuration"
        );
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, KitError> {
        let path = path.as_ref();
        debug!("Loading collection-kit configuration from {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| {
            let code = if e.kind() == std::io::ErrorKind::NotFound {
                ErrorCode::CONFIG_NOT_FOUND
            } else {
                ErrorCode::CONFIG_IO_ERROR
            };
            KitError::config_with_code(
                code,
                format!("Failed to read configuration file: {}", path.display()),
            )
            .with_source(e)
        })?;

        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String, KitError> {
        toml::to_string(self).map_err(|e| {
            KitError::config("Failed to serialize collection-kit configuration").with_source(e)
        })
    }
}
