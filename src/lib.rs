//! Popcatch - simulation core for a falling-object catcher arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, kinematics, collision, scoring)
//! - `game`: Host-facing game loop handle and lifecycle state machine
//! - `tuning`: Data-driven game balance
//! - `error`: Error taxonomy
//!
//! The core never draws anything. A host pumps `Game::tick()` once per
//! displayed frame and pulls a render snapshot back out.

pub mod error;
pub mod game;
pub mod sim;
pub mod tuning;

pub use error::GameError;
pub use game::{Game, GamePhase, ObjectView, Snapshot};
pub use tuning::Tuning;

/// Game configuration constants (reference values from the tuned build)
pub mod consts {
    /// Reference simulation tick (60 Hz); fall speed is expressed in
    /// world-units per tick at this rate
    pub const REFERENCE_DT: f32 = 1.0 / 60.0;
    /// Maximum frame delta accepted per tick, prevents catch-up jumps
    /// after a stall or background tab
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// World-space height of the play area; width follows viewport aspect
    pub const PLAY_AREA_HEIGHT: f32 = 8.0;

    /// Seconds between spawns
    pub const SPAWN_INTERVAL: f32 = 0.8;
    /// Horizontal inset from the play-area edges when picking a spawn x
    pub const SPAWN_X_MARGIN: f32 = 0.2;
    /// How far above the top edge objects spawn
    pub const SPAWN_Y_OFFSET: f32 = 0.5;
    /// How far below the bottom edge an object must fall to count as missed
    pub const DESPAWN_MARGIN: f32 = 0.5;

    /// Fall speed in world-units per reference tick
    pub const FALL_SPEED: f32 = 0.025;
    /// Rotation speed is drawn uniformly from ±this, radians per tick
    pub const ROTATION_SPEED_RANGE: f32 = 0.05;

    /// Catcher defaults
    pub const CATCHER_HALF_WIDTH: f32 = 0.75;
    pub const CATCHER_HALF_HEIGHT: f32 = 0.75;
    pub const CATCHER_START_Y: f32 = -3.2;

    /// Score deltas per category
    pub const SCORE_NORMAL: i64 = 1;
    pub const SCORE_BURNT: i64 = -1;
    pub const SCORE_GOLD: i64 = 10;

    /// Spawn weights per category (cumulative draw, need not sum to 1)
    pub const WEIGHT_NORMAL: f32 = 0.55;
    pub const WEIGHT_BURNT: f32 = 0.40;
    pub const WEIGHT_GOLD: f32 = 0.05;
}
