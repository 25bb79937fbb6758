//! Generator configuration loading from YAML files
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! usable configuration.

use crate::{GeneratorError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Stub generation settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StubConfig {
    /// Prefix of every generated module (e.g., "mypy_boto3_")
    pub module_prefix: String,

    /// Prefix of every generated distribution name (e.g., "mypy-boto3-")
    pub package_prefix: String,

    /// Version string stamped into generated file headers
    pub builder_version: String,

    /// Services that are never generated even if a schema is supplied
    pub skip_services: Vec<String>,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            module_prefix: "mypy_boto3_".to_string(),
            package_prefix: "mypy-boto3-".to_string(),
            builder_version: env!("CARGO_PKG_VERSION").to_string(),
            skip_services: Vec::new(),
        }
    }
}

impl StubConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GeneratorError::Parse(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Whether a service is excluded from generation
    pub fn is_skipped(&self, service_name: &str) -> bool {
        self.skip_services.iter().any(|s| s == service_name)
    }
}
