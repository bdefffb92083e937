use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Result of a single coin flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrialOutcome {
    /// The success label.
    Heads,
    /// The failure label.
    Tails,
}

impl TrialOutcome {
    /// Both outcomes in product enumeration order.
    pub const ALL: [TrialOutcome; 2] = [TrialOutcome::Heads, TrialOutcome::Tails];

    /// Returns `true` for the outcome counted as a success.
    pub fn is_success(self) -> bool {
        matches!(self, TrialOutcome::Heads)
    }

    /// Returns the lowercase label of the outcome.
    pub fn label(self) -> &'static str {
        match self {
            TrialOutcome::Heads => "heads",
            TrialOutcome::Tails => "tails",
        }
    }
}

impl Display for TrialOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
