use std::fs;
use std::path::Path;

use coin_core::{CoinError, ErrorInfo};
use serde::{Deserialize, Serialize};

use crate::generate::{DEFAULT_NUM_FLIPS, MAX_FLIPS};
use crate::serde::{from_yaml_slice, to_yaml_string};

/// How the weights of a sample space are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Brute-force enumeration of every outcome sequence.
    #[default]
    Enumerate,
    /// Direct evaluation of binomial coefficients.
    ClosedForm,
}

impl Strategy {
    /// Stable label used in reports and logs.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Enumerate => "enumerate",
            Strategy::ClosedForm => "closed_form",
        }
    }
}

/// YAML-configurable parameters for a sample space computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceConfig {
    /// Number of flips per outcome sequence.
    #[serde(default = "default_num_flips")]
    pub num_flips: i64,
    /// Upper bound on `num_flips`; `None` disables the ceiling.
    #[serde(default = "default_max_flips")]
    pub max_flips: Option<u32>,
    /// Computation strategy.
    #[serde(default)]
    pub strategy: Strategy,
}

fn default_num_flips() -> i64 {
    i64::from(DEFAULT_NUM_FLIPS)
}

fn default_max_flips() -> Option<u32> {
    Some(20)
}

impl Default for SpaceConfig {
    fn default() -> Self {
        Self {
            num_flips: default_num_flips(),
            max_flips: default_max_flips(),
            strategy: Strategy::default(),
        }
    }
}

impl SpaceConfig {
    /// Creates a configuration for `num_flips` with default ceiling and strategy.
    pub fn with_num_flips(num_flips: i64) -> Self {
        Self {
            num_flips,
            ..Self::default()
        }
    }

    /// Checks that the configured values are mutually consistent.
    pub fn validate(&self) -> Result<(), CoinError> {
        if let Some(ceiling) = self.max_flips {
            if ceiling > MAX_FLIPS {
                return Err(CoinError::Config(
                    ErrorInfo::new("max_flips_out_of_range", "max_flips exceeds the supported limit")
                        .with_context("max_flips", ceiling)
                        .with_context("limit", MAX_FLIPS),
                ));
            }
        }
        Ok(())
    }

    /// Parses and validates a configuration from YAML bytes.
    pub fn from_yaml_slice(data: &[u8]) -> Result<Self, CoinError> {
        let config: SpaceConfig = from_yaml_slice(data)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as YAML.
    pub fn to_yaml(&self) -> Result<String, CoinError> {
        to_yaml_string(self)
    }
}

fn io_error(code: &str, path: &Path, err: std::io::Error) -> CoinError {
    CoinError::Io(ErrorInfo::new(code, err.to_string()).with_context("path", path.display()))
}

/// Loads a configuration file from disk.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SpaceConfig, CoinError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| io_error("config_read", path, err))?;
    SpaceConfig::from_yaml_slice(&bytes)
}
