use std::collections::BTreeMap;

use coin_core::{CoinError, SchemaVersion};
use serde::{Deserialize, Serialize};

use crate::config::{SpaceConfig, Strategy};
use crate::generate::sample_space_from_config;
use crate::hash::stable_hash_string;

/// Serializable summary of a generated sample space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSpaceReport {
    /// Schema version of the report payload.
    pub schema_version: SchemaVersion,
    /// Number of flips per sequence.
    pub num_flips: u32,
    /// Strategy that produced the weights.
    pub strategy: Strategy,
    /// Sum of all weights.
    pub total: u64,
    /// Weights keyed by success count.
    pub weights: BTreeMap<u32, u64>,
    /// SHA256 digest of `(num_flips, weights)`; independent of the strategy.
    pub digest: String,
}

#[derive(Serialize)]
struct DigestInput<'a> {
    num_flips: u32,
    weights: &'a BTreeMap<u32, u64>,
}

/// Generates the sample space described by `config` and summarises it.
pub fn build_report(config: &SpaceConfig) -> Result<SampleSpaceReport, CoinError> {
    let space = sample_space_from_config(config)?;
    let num_flips = space.num_flips();
    let total = space.total();
    let weights = space.into_map();
    let digest = stable_hash_string(&DigestInput {
        num_flips,
        weights: &weights,
    })?;
    Ok(SampleSpaceReport {
        schema_version: SchemaVersion::default(),
        num_flips,
        strategy: config.strategy,
        total,
        weights,
        digest,
    })
}
