//! Core simulation types and world state

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::PLAY_AREA_HEIGHT;
use crate::error::GameError;
use crate::tuning::Tuning;

use super::catcher::CatcherController;
use super::pool::FallingObjectPool;
use super::score::ScoreLedger;
use super::spawn::SpawnScheduler;

/// Category of a falling object
///
/// A closed variant set; the score delta and spawn weight for each live in
/// [`Tuning`], not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Normal,
    Burnt,
    Gold,
}

/// The rectangular world-space region gameplay happens in
///
/// Derived from the viewport aspect ratio: fixed world height, width scaled
/// to match, centered on the origin. Recomputed on resize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl PlayArea {
    /// Build the play area for a viewport, keeping the reference world height
    pub fn from_viewport(width: f32, height: f32) -> Result<Self, GameError> {
        if !(width > 0.0) || !(height > 0.0) {
            return Err(GameError::InvalidConfiguration(format!(
                "viewport dimensions must be positive, got {width}x{height}"
            )));
        }
        let aspect = width / height;
        let world_width = PLAY_AREA_HEIGHT * aspect;
        Ok(Self {
            left: -world_width / 2.0,
            right: world_width / 2.0,
            top: PLAY_AREA_HEIGHT / 2.0,
            bottom: -PLAY_AREA_HEIGHT / 2.0,
        })
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }
}

/// A spawned item descending through the play area
///
/// Owned exclusively by [`FallingObjectPool`]; everything else sees ids or
/// read-only views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallingObject {
    pub id: u32,
    pub category: Category,
    pub pos: Vec2,
    /// Current rotation, radians
    pub rotation: f32,
    /// Radians per reference tick, symmetric around zero
    pub rotation_speed: f32,
    /// Tick the object was spawned on
    pub spawn_tick: u64,
}

/// The player-controlled rectangle that intercepts falling objects
///
/// Exactly one per session; never destroyed mid-game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catcher {
    pub pos: Vec2,
    pub half_width: f32,
    pub half_height: f32,
}

impl Catcher {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(0.0, tuning.catcher_start_y),
            half_width: tuning.catcher_half_width,
            half_height: tuning.catcher_half_height,
        }
    }

    /// Hitbox test used both for drag pickup and catch detection
    pub fn contains_point(&self, point: Vec2) -> bool {
        (point.x - self.pos.x).abs() <= self.half_width
            && (point.y - self.pos.y).abs() <= self.half_height
    }

    /// Set the horizontal target directly, clamped to bounds.
    /// Out-of-range input is clamped, never rejected.
    pub fn set_target_x(&mut self, world_x: f32, area: &PlayArea) {
        self.pos.x = clamp_or_center(
            world_x,
            area.left + self.half_width,
            area.right - self.half_width,
        );
    }

    /// Clamp position into the playable band so the hitbox stays in bounds.
    /// A play area narrower than the hitbox pins the catcher to the center.
    pub fn clamp_to(&mut self, area: &PlayArea) {
        self.pos.x = clamp_or_center(self.pos.x, area.left + self.half_width, area.right - self.half_width);
        self.pos.y = clamp_or_center(self.pos.y, area.bottom + self.half_height, area.top - self.half_height);
    }
}

pub(crate) fn clamp_or_center(value: f32, min: f32, max: f32) -> f32 {
    if min <= max {
        value.clamp(min, max)
    } else {
        (min + max) / 2.0
    }
}

/// Complete simulation state, deterministic under a fixed seed
#[derive(Debug)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    /// The one RNG every random draw flows through
    pub rng: Pcg32,
    /// Current play-area bounds
    pub play_area: PlayArea,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub scheduler: SpawnScheduler,
    pub pool: FallingObjectPool,
    pub catcher: Catcher,
    pub controller: CatcherController,
    pub ledger: ScoreLedger,
}

impl World {
    pub fn new(play_area: PlayArea, tuning: &Tuning, seed: u64) -> Self {
        let mut catcher = Catcher::new(tuning);
        catcher.clamp_to(&play_area);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            play_area,
            time_ticks: 0,
            scheduler: SpawnScheduler::new(),
            pool: FallingObjectPool::new(),
            catcher,
            controller: CatcherController::new(),
            ledger: ScoreLedger::new(),
        }
    }

    /// Recompute bounds on viewport resize and re-clamp the catcher
    pub fn resize(&mut self, play_area: PlayArea) {
        self.play_area = play_area;
        self.catcher.clamp_to(&self.play_area);
    }
}
