use coin_core::{CoinError, ErrorInfo};
use serde::{Deserialize, Serialize};

use crate::generate::MAX_FLIPS;
use crate::trial::TrialOutcome;

/// Longest sequence that can be enumerated: the sequence count must fit both
/// the `u64` running index and `usize`.
pub const MAX_SEQUENCE_FLIPS: u32 = if MAX_FLIPS < usize::BITS - 1 {
    MAX_FLIPS
} else {
    usize::BITS - 1
};

fn too_long(num_flips: impl ToString) -> CoinError {
    CoinError::InvalidArgument(
        ErrorInfo::new("num_flips_too_large", "sequence length exceeds the enumerable range")
            .with_context("num_flips", num_flips)
            .with_context("max_flips", MAX_SEQUENCE_FLIPS),
    )
}

/// One realisation of a fixed number of independent flips.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<TrialOutcome>")]
pub struct OutcomeSequence(Vec<TrialOutcome>);

impl OutcomeSequence {
    /// Wraps an explicit list of at most [`MAX_SEQUENCE_FLIPS`] outcomes.
    pub fn new(outcomes: Vec<TrialOutcome>) -> Result<Self, CoinError> {
        if outcomes.len() > MAX_SEQUENCE_FLIPS as usize {
            return Err(too_long(outcomes.len()));
        }
        Ok(Self(outcomes))
    }

    /// Number of flips in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the empty sequence produced by zero flips.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Counts the positions holding the success outcome.
    pub fn successes(&self) -> u32 {
        // Bounded by MAX_SEQUENCE_FLIPS.
        self.0.iter().filter(|outcome| outcome.is_success()).count() as u32
    }

    /// Borrows the outcomes in flip order.
    pub fn outcomes(&self) -> &[TrialOutcome] {
        &self.0
    }
}

impl TryFrom<Vec<TrialOutcome>> for OutcomeSequence {
    type Error = CoinError;

    fn try_from(outcomes: Vec<TrialOutcome>) -> Result<Self, Self::Error> {
        Self::new(outcomes)
    }
}

/// Iterator over every outcome sequence of a fixed length.
///
/// Sequences are produced in standard product order: the leftmost flip varies
/// slowest, the rightmost fastest, and [`TrialOutcome::Heads`] precedes
/// [`TrialOutcome::Tails`] at every position. Each sequence is decoded from a
/// running index whose bits, most significant first, select `ALL[bit]`.
#[derive(Debug, Clone)]
pub struct OutcomeSequences {
    num_flips: u32,
    next: u64,
    end: u64,
}

impl OutcomeSequences {
    /// Enumerates all `2^num_flips` sequences.
    ///
    /// Lengths above [`MAX_SEQUENCE_FLIPS`] are rejected since the sequence
    /// count would not fit the running index or `usize`.
    pub fn new(num_flips: u32) -> Result<Self, CoinError> {
        if num_flips > MAX_SEQUENCE_FLIPS {
            return Err(too_long(num_flips));
        }
        Ok(Self {
            num_flips,
            next: 0,
            end: 1u64 << num_flips,
        })
    }

    /// Length of every sequence yielded by the iterator.
    pub fn num_flips(&self) -> u32 {
        self.num_flips
    }

    fn decode(&self, index: u64) -> OutcomeSequence {
        let outcomes = (0..self.num_flips)
            .rev()
            .map(|shift| TrialOutcome::ALL[((index >> shift) & 1) as usize])
            .collect();
        OutcomeSequence(outcomes)
    }
}

impl Iterator for OutcomeSequences {
    type Item = OutcomeSequence;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let sequence = self.decode(self.next);
        self.next += 1;
        Some(sequence)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // `end <= 2^MAX_SEQUENCE_FLIPS`, which fits in usize.
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for OutcomeSequences {}
