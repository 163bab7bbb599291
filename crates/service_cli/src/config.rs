//! CLI configuration loading
//!
//! Loads configuration from a TOML file. A missing file yields defaults;
//! command-line flags override whatever the file sets.

use serde::Deserialize;
use std::path::Path;

use crate::{CliError, Result};

/// CLI configuration
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct CliConfig {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Lattice pricing settings
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Brownian path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// General CLI settings
#[derive(Debug, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Lattice pricing configuration
#[derive(Debug, Deserialize, PartialEq)]
pub struct PricingConfig {
    /// Step count for `price` when `--steps` is not given
    #[serde(default = "default_steps")]
    pub default_steps: usize,

    /// Step counts for `converge` when `--steps` is not given
    #[serde(default = "default_converge_steps")]
    pub converge_steps: Vec<usize>,
}

/// Brownian path configuration
#[derive(Debug, Deserialize, PartialEq)]
pub struct PathsConfig {
    /// Step counts for `paths` when `--steps` is not given
    #[serde(default = "default_path_step_counts")]
    pub step_counts: Vec<usize>,

    /// Fixed seed; drawn from entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_steps: default_steps(),
            converge_steps: default_converge_steps(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            step_counts: default_path_step_counts(),
            seed: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_steps() -> usize {
    4
}

fn default_converge_steps() -> Vec<usize> {
    vec![1, 4, 50, 200]
}

fn default_path_step_counts() -> Vec<usize> {
    vec![10, 25, 1000]
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::Parse(format!("Failed to parse config: {}", e)))
    }
}
