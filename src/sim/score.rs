//! Score ledger
//!
//! Accumulates the configured point delta per caught category. The total is
//! a plain signed integer; catching enough burnt items takes it negative.

use crate::tuning::ScoreTable;

use super::state::Category;

/// Running score total, owned here exclusively
#[derive(Debug, Default)]
pub struct ScoreLedger {
    total: i64,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self { total: 0 }
    }

    /// Apply the configured delta for a caught object
    pub fn apply(&mut self, category: Category, scores: &ScoreTable) {
        let delta = scores.delta(category);
        self.total += delta;
        log::debug!("caught {category:?}: {delta:+} -> {}", self.total);
    }

    pub fn total(&self) -> i64 {
        self.total
    }
}
