//! Spawn scheduling
//!
//! Accumulates elapsed time and decides when (and what) to spawn. Simple
//! timer semantics: even a very long delta produces at most one spawn per
//! `advance` call; the remainder past one interval is carried so cadence is
//! preserved, not a catch-up burst.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::tuning::{CategoryWeights, Tuning};

use super::state::Category;

/// Decides when a new falling object should be created, and which category
#[derive(Debug, Default)]
pub struct SpawnScheduler {
    accumulator: f32,
}

impl SpawnScheduler {
    pub fn new() -> Self {
        Self { accumulator: 0.0 }
    }

    /// Advance the spawn timer; returns the category to spawn if the
    /// interval elapsed, at most once per call.
    pub fn advance(
        &mut self,
        delta: f32,
        tuning: &Tuning,
        rng: &mut Pcg32,
    ) -> Option<Category> {
        self.accumulator += delta;
        if self.accumulator < tuning.spawn_interval {
            return None;
        }
        self.accumulator -= tuning.spawn_interval;
        if self.accumulator >= tuning.spawn_interval {
            // Delta spanned several intervals; spawn once and drop the
            // excess so the following frames don't burst either.
            self.accumulator = 0.0;
        }
        Some(draw_category(&tuning.weights, rng))
    }
}

/// Draw a category by cumulative weight in declared order Normal→Burnt→Gold
///
/// Weights need not sum to 1; the draw is uniform over the total weight.
fn draw_category(weights: &CategoryWeights, rng: &mut Pcg32) -> Category {
    let r = rng.random::<f32>() * weights.total();
    if r < weights.normal {
        Category::Normal
    } else if r < weights.normal + weights.burnt {
        Category::Burnt
    } else {
        Category::Gold
    }
}
