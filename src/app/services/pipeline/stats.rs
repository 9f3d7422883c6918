//! Run summary for the flight record pipeline

use serde::{Deserialize, Serialize};

use crate::app::models::Outcome;

/// Per-outcome row counts for one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Data rows read from the source
    pub rows_read: u64,

    /// Rows written to the valid sink
    pub valid: u64,

    /// Rows written to the error sink
    pub invalid: u64,

    /// Rows with no recognised field present, written nowhere
    pub empty: u64,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one classified row
    pub fn record(&mut self, outcome: &Outcome) {
        self.rows_read += 1;
        match outcome {
            Outcome::Valid(_) => self.valid += 1,
            Outcome::Invalid(_) => self.invalid += 1,
            Outcome::Empty => self.empty += 1,
        }
    }

    /// Valid rows as a percentage of non-empty rows
    pub fn valid_rate(&self) -> f64 {
        let non_empty = self.valid + self.invalid;
        if non_empty == 0 {
            0.0
        } else {
            (self.valid as f64 / non_empty as f64) * 100.0
        }
    }

    /// True when nothing was sent to the error sink
    pub fn is_clean(&self) -> bool {
        self.invalid == 0
    }
}
