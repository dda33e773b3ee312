//! Catcher drag control
//!
//! Maps host pointer/touch input (already converted to world coordinates)
//! into a clamped catcher position. A press must land inside the catcher's
//! hitbox to begin a drag; moves then apply the offset captured at press
//! time so the catcher never snaps to the pointer. One pointer only; the
//! host is expected to feed the first touch point and ignore the rest.

use glam::Vec2;

use super::state::{Catcher, PlayArea};

/// Offset between the press point and the catcher center, captured at
/// drag start
#[derive(Debug, Clone, Copy)]
struct DragState {
    offset: Vec2,
}

/// Translates input events into catcher movement
#[derive(Debug, Default)]
pub struct CatcherController {
    drag: Option<DragState>,
}

impl CatcherController {
    pub fn new() -> Self {
        Self { drag: None }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Begin a drag if the press lands inside the catcher hitbox.
    /// Returns whether a drag started.
    pub fn press(&mut self, world: Vec2, catcher: &Catcher) -> bool {
        if self.drag.is_some() {
            // Already tracking a pointer; further presses are ignored
            return false;
        }
        if catcher.contains_point(world) {
            self.drag = Some(DragState {
                offset: world - catcher.pos,
            });
            true
        } else {
            false
        }
    }

    /// Move the catcher if a drag is active, applying the press-time offset
    /// and clamping into the play area
    pub fn drag_to(&mut self, world: Vec2, catcher: &mut Catcher, area: &PlayArea) {
        let Some(drag) = self.drag else {
            return;
        };
        catcher.pos = world - drag.offset;
        catcher.clamp_to(area);
    }

    /// End the drag, if any
    pub fn release(&mut self) {
        self.drag = None;
    }
}
