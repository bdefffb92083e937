#![deny(missing_docs)]
#![doc = "Weighted sample spaces for repeated independent coin flips."]

/// Binomial coefficient helpers.
pub mod binomial;
/// YAML configuration schema and defaults.
pub mod config;
/// Sample space generation entry points.
pub mod generate;
/// Canonical hashing helpers.
pub mod hash;
/// Report assembly helpers.
pub mod report;
/// Outcome sequence enumeration.
pub mod sequence;
/// Canonical JSON and YAML serde helpers.
pub mod serde;
/// Weighted sample space container.
pub mod space;
/// Two-valued trial outcomes.
pub mod trial;

pub use binomial::binomial_coefficient;
pub use config::{load_config, SpaceConfig, Strategy};
pub use generate::{
    binomial_sample_space, generate_coin_sample_space, generate_default_coin_sample_space,
    sample_space_from_config, DEFAULT_NUM_FLIPS, MAX_FLIPS,
};
pub use report::{build_report, SampleSpaceReport};
pub use sequence::{OutcomeSequence, OutcomeSequences, MAX_SEQUENCE_FLIPS};
pub use space::WeightedSampleSpace;
pub use trial::TrialOutcome;
