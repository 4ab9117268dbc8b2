use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::benchmark::BenchmarkThresholds;

pub const DEFAULT_CONFIG_FILE: &str = "ratecutter.toml";

/// Savings proposal settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProposalConfig {
    /// Rate reduction offered in proposals, in percentage points
    #[serde(default = "default_reduction")]
    pub reduction: f64,
}

impl Default for ProposalConfig {
    fn default() -> Self {
        Self {
            reduction: default_reduction(),
        }
    }
}

fn default_reduction() -> f64 {
    crate::engine::DEFAULT_REDUCTION
}

impl ProposalConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.reduction.is_finite() || self.reduction < 0.0 {
            return Err(format!(
                "proposal reduction must be a non-negative number, got {}",
                self.reduction
            ));
        }
        Ok(())
    }
}

/// External lead store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadStoreConfig {
    /// Insert endpoint URL; submissions fail fast when unset
    pub url: Option<String>,

    /// Optional bearer token for the store
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for LeadStoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatecutterConfig {
    #[serde(default)]
    pub proposal: ProposalConfig,

    #[serde(default)]
    pub benchmarks: BenchmarkThresholds,

    #[serde(default)]
    pub lead_store: LeadStoreConfig,
}

/// Parse a config from TOML, falling back to defaults for any section that
/// fails validation.
pub fn parse_and_validate_config(contents: &str) -> Result<RatecutterConfig, String> {
    let mut config = toml::from_str::<RatecutterConfig>(contents)
        .map_err(|e| format!("failed to parse config: {}", e))?;

    if let Err(e) = config.benchmarks.validate() {
        log::warn!("invalid benchmark thresholds: {}. Using defaults.", e);
        config.benchmarks = BenchmarkThresholds::default();
    }
    if let Err(e) = config.proposal.validate() {
        log::warn!("invalid proposal settings: {}. Using defaults.", e);
        config.proposal = ProposalConfig::default();
    }

    Ok(config)
}

/// Load configuration.
///
/// An explicit path must exist and parse. The default `ratecutter.toml` is
/// optional: missing means defaults, unreadable or malformed means defaults
/// with a warning.
pub fn load_config(explicit_path: Option<&Path>) -> Result<RatecutterConfig> {
    match explicit_path {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            parse_and_validate_config(&contents).map_err(|e| anyhow::anyhow!(e))
        }
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if !path.exists() {
                return Ok(RatecutterConfig::default());
            }
            match fs::read_to_string(path) {
                Ok(contents) => match parse_and_validate_config(&contents) {
                    Ok(config) => {
                        log::debug!("loaded config from {}", path.display());
                        Ok(config)
                    }
                    Err(e) => {
                        log::warn!("{}. Using defaults.", e);
                        Ok(RatecutterConfig::default())
                    }
                },
                Err(e) => {
                    log::warn!(
                        "failed to read {}: {}. Using defaults.",
                        path.display(),
                        e
                    );
                    Ok(RatecutterConfig::default())
                }
            }
        }
    }
}
