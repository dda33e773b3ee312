//! Data-driven game balance
//!
//! Every gameplay number that was hard-coded in early builds lives here so
//! the category→score and category→weight mappings are configuration, not
//! algorithm. Hosts can ship a JSON blob to override the defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;
use crate::sim::Category;

/// Per-category spawn weights
///
/// The category draw uses cumulative-weight semantics in the declared order
/// Normal → Burnt → Gold, so weights need not sum to exactly 1.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CategoryWeights {
    pub normal: f32,
    pub burnt: f32,
    pub gold: f32,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            normal: WEIGHT_NORMAL,
            burnt: WEIGHT_BURNT,
            gold: WEIGHT_GOLD,
        }
    }
}

impl CategoryWeights {
    pub fn total(&self) -> f32 {
        self.normal + self.burnt + self.gold
    }
}

/// Per-category score deltas
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreTable {
    pub normal: i64,
    pub burnt: i64,
    pub gold: i64,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            normal: SCORE_NORMAL,
            burnt: SCORE_BURNT,
            gold: SCORE_GOLD,
        }
    }
}

impl ScoreTable {
    /// Score delta for catching an object of the given category
    pub fn delta(&self, category: Category) -> i64 {
        match category {
            Category::Normal => self.normal,
            Category::Burnt => self.burnt,
            Category::Gold => self.gold,
        }
    }
}

/// Complete gameplay tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Seconds between spawns
    pub spawn_interval: f32,
    /// Spawn probability weights per category
    pub weights: CategoryWeights,
    /// Score deltas per category
    pub scores: ScoreTable,
    /// Fall speed in world-units per reference tick (60 Hz)
    pub fall_speed: f32,
    /// Horizontal inset from play-area edges when picking a spawn x
    pub spawn_x_margin: f32,
    /// How far above the top edge objects spawn
    pub spawn_y_offset: f32,
    /// How far below the bottom edge an object counts as missed
    pub despawn_margin: f32,
    /// Rotation speed drawn uniformly from ±this, radians per tick
    pub rotation_speed_range: f32,
    /// Catcher hitbox half extents
    pub catcher_half_width: f32,
    pub catcher_half_height: f32,
    /// Catcher resting y position
    pub catcher_start_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spawn_interval: SPAWN_INTERVAL,
            weights: CategoryWeights::default(),
            scores: ScoreTable::default(),
            fall_speed: FALL_SPEED,
            spawn_x_margin: SPAWN_X_MARGIN,
            spawn_y_offset: SPAWN_Y_OFFSET,
            despawn_margin: DESPAWN_MARGIN,
            rotation_speed_range: ROTATION_SPEED_RANGE,
            catcher_half_width: CATCHER_HALF_WIDTH,
            catcher_half_height: CATCHER_HALF_HEIGHT,
            catcher_start_y: CATCHER_START_Y,
        }
    }
}

impl Tuning {
    /// Parse tuning from a JSON string; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let tuning: Tuning = serde_json::from_str(json)
            .map_err(|e| GameError::InvalidConfiguration(format!("bad tuning JSON: {e}")))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Fail fast on configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), GameError> {
        if !(self.spawn_interval > 0.0) {
            return Err(GameError::InvalidConfiguration(format!(
                "spawn_interval must be positive, got {}",
                self.spawn_interval
            )));
        }
        if !(self.fall_speed > 0.0) {
            return Err(GameError::InvalidConfiguration(format!(
                "fall_speed must be positive, got {}",
                self.fall_speed
            )));
        }
        if !(self.weights.total() > 0.0) {
            return Err(GameError::InvalidConfiguration(
                "category weights must not all be zero".into(),
            ));
        }
        if !(self.catcher_half_width > 0.0) || !(self.catcher_half_height > 0.0) {
            return Err(GameError::InvalidConfiguration(
                "catcher half extents must be positive".into(),
            ));
        }
        if !(self.rotation_speed_range >= 0.0) {
            return Err(GameError::InvalidConfiguration(format!(
                "rotation_speed_range must be non-negative, got {}",
                self.rotation_speed_range
            )));
        }
        if !(self.spawn_x_margin >= 0.0) || !(self.despawn_margin >= 0.0) {
            return Err(GameError::InvalidConfiguration(
                "spawn and despawn margins must be non-negative".into(),
            ));
        }
        Ok(())
    }
}
