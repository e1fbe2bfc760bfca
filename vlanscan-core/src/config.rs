//! Configuration for scanning and output

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main extraction configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractConfig {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl ExtractConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ExtractConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the scanner cannot match against
    pub fn validate(&self) -> Result<()> {
        if self.scan.id_label.trim().is_empty() {
            anyhow::bail!("Configuration error: 'scan.id_label' must not be empty");
        }
        if self.scan.description_label.trim().is_empty() {
            anyhow::bail!("Configuration error: 'scan.description_label' must not be empty");
        }
        if self.output.column_width == 0 {
            anyhow::bail!("Configuration error: 'output.column_width' must be at least 1");
        }
        Ok(())
    }
}

/// Labels that mark a VLAN definition inside a row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Label cell preceding the VLAN identifier
    #[serde(default = "default_id_label")]
    pub id_label: String,
    /// Label cell preceding the description
    #[serde(default = "default_description_label")]
    pub description_label: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            id_label: default_id_label(),
            description_label: default_description_label(),
        }
    }
}

/// Shape of the emitted table and CSV
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit the slug column
    #[serde(default = "default_slug")]
    pub slug: bool,
    /// Width of each console table column
    #[serde(default = "default_column_width")]
    pub column_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            slug: default_slug(),
            column_width: default_column_width(),
        }
    }
}

fn default_id_label() -> String {
    "vlan".to_string()
}

fn default_description_label() -> String {
    "description".to_string()
}

fn default_slug() -> bool {
    true
}

fn default_column_width() -> usize {
    30
}
