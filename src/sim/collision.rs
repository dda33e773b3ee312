//! Catch detection
//!
//! Axis-aligned half-extent overlap between a falling object's center and
//! the catcher's hitbox. Not a swept test: an object fast enough to cross
//! the whole hitbox between two ticks can tunnel through, which is accepted
//! at the frame rates this game runs at.

use super::state::{Catcher, FallingObject, PlayArea};

/// Per-tick classification of a falling object against the catcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Inside the catcher hitbox this tick
    Caught,
    /// Fell below the catchable region without being caught
    Missed,
    /// Still descending
    InFlight,
}

/// Classify one object. Caught is evaluated before Missed, so an object
/// that is simultaneously past the bottom margin and overlapping a catcher
/// parked on the bottom edge still counts as a catch.
pub fn classify(
    object: &FallingObject,
    catcher: &Catcher,
    area: &PlayArea,
    despawn_margin: f32,
) -> Outcome {
    let dx = (object.pos.x - catcher.pos.x).abs();
    let dy = (object.pos.y - catcher.pos.y).abs();
    if dx < catcher.half_width && dy < catcher.half_height {
        return Outcome::Caught;
    }
    if object.pos.y < area.bottom - despawn_margin {
        return Outcome::Missed;
    }
    Outcome::InFlight
}
