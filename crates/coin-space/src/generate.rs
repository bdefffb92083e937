use coin_core::{CoinError, ErrorInfo};
use tracing::{debug, warn};

use crate::binomial::binomial_coefficient;
use crate::config::{SpaceConfig, Strategy};
use crate::sequence::OutcomeSequences;
use crate::space::WeightedSampleSpace;

/// Number of flips used when the caller does not choose one.
pub const DEFAULT_NUM_FLIPS: u32 = 10;

/// Largest flip count whose total `2^num_flips` fits the `u64` weights.
pub const MAX_FLIPS: u32 = 63;

fn invalid_num_flips(code: &str, message: &str, num_flips: i64) -> CoinError {
    warn!(num_flips, code, "rejected num_flips");
    CoinError::InvalidArgument(
        ErrorInfo::new(code, message)
            .with_context("num_flips", num_flips)
            .with_context("max_flips", MAX_FLIPS),
    )
}

pub(crate) fn validate_num_flips(num_flips: i64) -> Result<u32, CoinError> {
    if num_flips < 0 {
        return Err(invalid_num_flips(
            "num_flips_negative",
            "num_flips must be a non-negative integer",
            num_flips,
        ));
    }
    match u32::try_from(num_flips) {
        Ok(flips) if flips <= MAX_FLIPS => Ok(flips),
        _ => Err(invalid_num_flips(
            "num_flips_too_large",
            "num_flips exceeds the representable sample space",
            num_flips,
        )),
    }
}

/// Enumerates every sequence of `num_flips` coin flips and tallies them by
/// number of heads.
///
/// The weight stored under `k` equals `C(num_flips, k)` and the weights sum to
/// `2^num_flips`. Cost is exponential in `num_flips`; use
/// [`binomial_sample_space`] for large inputs. Negative inputs are rejected
/// before any enumeration takes place, as are lengths above
/// [`crate::MAX_SEQUENCE_FLIPS`] on targets with a narrow `usize`.
pub fn generate_coin_sample_space(num_flips: i64) -> Result<WeightedSampleSpace, CoinError> {
    let flips = validate_num_flips(num_flips)?;
    let mut space = WeightedSampleSpace::empty(flips);
    for sequence in OutcomeSequences::new(flips)? {
        space.record(sequence.successes());
    }
    debug!(
        num_flips = flips,
        strategy = Strategy::Enumerate.label(),
        total = space.total(),
        "generated sample space"
    );
    Ok(space)
}

/// Enumerated sample space for [`DEFAULT_NUM_FLIPS`] flips.
pub fn generate_default_coin_sample_space() -> Result<WeightedSampleSpace, CoinError> {
    generate_coin_sample_space(i64::from(DEFAULT_NUM_FLIPS))
}

/// Closed-form counterpart of [`generate_coin_sample_space`].
///
/// Produces the same mapping from binomial coefficients without enumerating
/// any sequence.
pub fn binomial_sample_space(num_flips: i64) -> Result<WeightedSampleSpace, CoinError> {
    let flips = validate_num_flips(num_flips)?;
    let mut space = WeightedSampleSpace::empty(flips);
    for successes in 0..=flips {
        let weight = binomial_coefficient(flips, successes)
            .expect("C(n, k) fits in u64 for n <= MAX_FLIPS");
        space.add_weight(successes, weight);
    }
    debug!(
        num_flips = flips,
        strategy = Strategy::ClosedForm.label(),
        total = space.total(),
        "generated sample space"
    );
    Ok(space)
}

/// Generates the sample space described by `config`.
///
/// The configured ceiling is enforced before the strategy runs.
pub fn sample_space_from_config(config: &SpaceConfig) -> Result<WeightedSampleSpace, CoinError> {
    config.validate()?;
    if let Some(ceiling) = config.max_flips {
        if config.num_flips > i64::from(ceiling) {
            warn!(
                num_flips = config.num_flips,
                ceiling, "num_flips above configured ceiling"
            );
            return Err(CoinError::InvalidArgument(
                ErrorInfo::new(
                    "num_flips_above_ceiling",
                    "num_flips exceeds the configured ceiling",
                )
                .with_context("num_flips", config.num_flips)
                .with_context("ceiling", ceiling)
                .with_hint("raise max_flips or switch to the closed_form strategy"),
            ));
        }
    }
    match config.strategy {
        Strategy::Enumerate => generate_coin_sample_space(config.num_flips),
        Strategy::ClosedForm => binomial_sample_space(config.num_flips),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_boundaries() {
        assert_eq!(validate_num_flips(0).unwrap(), 0);
        assert_eq!(validate_num_flips(63).unwrap(), 63);
        assert_eq!(
            validate_num_flips(-1).unwrap_err().code(),
            "num_flips_negative"
        );
        assert_eq!(
            validate_num_flips(64).unwrap_err().code(),
            "num_flips_too_large"
        );
        assert_eq!(
            validate_num_flips(i64::MAX).unwrap_err().code(),
            "num_flips_too_large"
        );
    }
}
