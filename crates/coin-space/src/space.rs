use std::collections::btree_map;
use std::collections::BTreeMap;

use coin_core::{CoinError, ErrorInfo};
use serde::{Deserialize, Serialize};

use crate::generate::MAX_FLIPS;

/// Histogram of outcome sequences keyed by success count.
///
/// Only counts that were observed are present. Every count in `0..=num_flips`
/// is reachable, so a fully generated space holds `num_flips + 1` keys.
/// Deserialized payloads must satisfy the same invariants: every key lies in
/// `0..=num_flips` and the weights sum to exactly `2^num_flips`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSampleSpace")]
pub struct WeightedSampleSpace {
    num_flips: u32,
    weights: BTreeMap<u32, u64>,
}

impl WeightedSampleSpace {
    pub(crate) fn empty(num_flips: u32) -> Self {
        Self {
            num_flips,
            weights: BTreeMap::new(),
        }
    }

    pub(crate) fn record(&mut self, successes: u32) {
        self.add_weight(successes, 1);
    }

    pub(crate) fn add_weight(&mut self, successes: u32, weight: u64) {
        *self.weights.entry(successes).or_insert(0) += weight;
    }

    /// Number of flips every counted sequence is made of.
    pub fn num_flips(&self) -> u32 {
        self.num_flips
    }

    /// Number of sequences with exactly `successes` heads, if any were counted.
    pub fn weight(&self, successes: u32) -> Option<u64> {
        self.weights.get(&successes).copied()
    }

    /// Sum of all weights; equals `2^num_flips` for a generated space.
    pub fn total(&self) -> u64 {
        self.weights.values().sum()
    }

    /// Number of distinct success counts present.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns `true` when no sequence has been counted.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterates `(successes, weight)` pairs in ascending success order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.weights.iter().map(|(&successes, &weight)| (successes, weight))
    }

    /// Borrows the underlying mapping.
    pub fn as_map(&self) -> &BTreeMap<u32, u64> {
        &self.weights
    }

    /// Consumes the space and returns the underlying mapping.
    pub fn into_map(self) -> BTreeMap<u32, u64> {
        self.weights
    }
}

#[derive(Deserialize)]
struct RawSampleSpace {
    num_flips: u32,
    weights: BTreeMap<u32, u64>,
}

impl TryFrom<RawSampleSpace> for WeightedSampleSpace {
    type Error = CoinError;

    fn try_from(raw: RawSampleSpace) -> Result<Self, Self::Error> {
        let RawSampleSpace { num_flips, weights } = raw;
        if num_flips > MAX_FLIPS {
            return Err(CoinError::Serde(
                ErrorInfo::new(
                    "space_num_flips_too_large",
                    "num_flips exceeds the representable sample space",
                )
                .with_context("num_flips", num_flips),
            ));
        }
        if let Some(&successes) = weights.keys().find(|&&successes| successes > num_flips) {
            return Err(CoinError::Serde(
                ErrorInfo::new("space_key_out_of_range", "success count exceeds num_flips")
                    .with_context("num_flips", num_flips)
                    .with_context("successes", successes),
            ));
        }
        let expected = 1u64 << num_flips;
        let total = weights
            .values()
            .try_fold(0u64, |acc, &weight| acc.checked_add(weight));
        if total != Some(expected) {
            return Err(CoinError::Serde(
                ErrorInfo::new("space_total_mismatch", "weights do not sum to 2^num_flips")
                    .with_context("num_flips", num_flips)
                    .with_context("expected", expected),
            ));
        }
        Ok(Self { num_flips, weights })
    }
}

impl<'a> IntoIterator for &'a WeightedSampleSpace {
    type Item = (&'a u32, &'a u64);
    type IntoIter = btree_map::Iter<'a, u32, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.weights.iter()
    }
}
