//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Host-supplied deltas only (no hidden time sources past the clock)
//! - Seeded RNG only
//! - Stable iteration order (spawn order, by entity ID)
//! - No rendering or platform dependencies

pub mod catcher;
pub mod clock;
pub mod collision;
pub mod pool;
pub mod score;
pub mod spawn;
pub mod state;
pub mod tick;

pub use catcher::CatcherController;
pub use clock::FrameClock;
pub use collision::{Outcome, classify};
pub use pool::FallingObjectPool;
pub use score::ScoreLedger;
pub use spawn::SpawnScheduler;
pub use state::{Catcher, Category, FallingObject, PlayArea, World};
pub use tick::tick;
