//! Runtime configuration.
//!
//! Loaded from an optional YAML file. Every field has a default, so an empty
//! file (or no file) yields the standard COG creation settings:
//!
//! ```yaml
//! converter:
//!   binary: /usr/local/bin/gdal_translate
//!   block_size: 512
//!   compression: DEFLATE
//!   level: 9
//!   predictor: "YES"
//!   num_threads: ALL_CPUS
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{HwsdError, Result};

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HwsdConfig {
    pub converter: ConverterConfig,
}

/// `gdal_translate` invocation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    /// Path or name of the gdal_translate executable
    pub binary: String,
    /// Internal tile size in pixels
    pub block_size: u32,
    /// COG compression method
    pub compression: String,
    /// Compression level
    pub level: u8,
    /// Predictor setting passed through as-is
    pub predictor: String,
    /// Worker threads used by the COG driver
    pub num_threads: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            binary: "gdal_translate".to_string(),
            block_size: 512,
            compression: "DEFLATE".to_string(),
            level: 9,
            predictor: "YES".to_string(),
            num_threads: "ALL_CPUS".to_string(),
        }
    }
}

impl HwsdConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| HwsdError::InvalidConfig(format!("Cannot read {:?}: {}", path, e)))?;

        let config = Self::from_yaml_str(&contents).map_err(|e| match e {
            HwsdError::InvalidConfig(msg) => {
                HwsdError::InvalidConfig(format!("{} in {:?}", msg, path))
            }
            other => other,
        })?;

        debug!(path = ?path, binary = %config.converter.binary, "Loaded configuration");
        Ok(config)
    }

    /// Parse configuration from YAML text. Blank input yields the defaults.
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(contents)
            .map_err(|e| HwsdError::InvalidConfig(format!("Invalid YAML: {}", e)))?;
        config.converter.check()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

impl ConverterConfig {
    fn check(&self) -> Result<()> {
        if self.binary.trim().is_empty() {
            return Err(HwsdError::InvalidConfig(
                "converter.binary must not be empty".to_string(),
            ));
        }
        if self.block_size == 0 || self.block_size % 16 != 0 {
            return Err(HwsdError::InvalidConfig(format!(
                "converter.block_size must be a positive multiple of 16, got {}",
                self.block_size
            )));
        }
        Ok(())
    }
}
