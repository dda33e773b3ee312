//! Host-facing game loop handle
//!
//! Owns the world, the frame clock, and the lifecycle state machine:
//! NotStarted → Running ⇄ Paused → Disposed. The host pumps `tick()` once
//! per displayed frame (or `advance()` with its own delta) and pulls render
//! state back out with `snapshot()`; the core never draws and never
//! schedules itself.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::sim::clock::FrameClock;
use crate::sim::state::{Category, PlayArea, World};
use crate::sim::tick::tick;
use crate::tuning::Tuning;

/// Lifecycle phase of the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the host's start trigger (end of its countdown, first
    /// interaction, assets ready). No spawning or advancing happens.
    NotStarted,
    /// Full pipeline runs every tick
    Running,
    /// Ticks are received but ignored; the clock is still sampled so
    /// resuming does not produce a delta spike
    Paused,
    /// Terminal; every further operation fails with `AlreadyDisposed`
    Disposed,
}

/// Read-only view of one live falling object for rendering
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ObjectView {
    pub id: u32,
    pub category: Category,
    pub pos: Vec2,
    pub rotation: f32,
}

/// Pull-based render state, emitted once per frame on request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub catcher_pos: Vec2,
    pub objects: Vec<ObjectView>,
    pub score: i64,
}

/// The game loop handle
#[derive(Debug)]
pub struct Game {
    phase: GamePhase,
    world: World,
    clock: FrameClock,
    tuning: Tuning,
}

impl Game {
    /// Build a game for the given viewport. Fails fast on a degenerate
    /// viewport or invalid tuning; nothing is retried later.
    pub fn new(
        viewport_width: f32,
        viewport_height: f32,
        tuning: Tuning,
        seed: u64,
    ) -> Result<Self, GameError> {
        tuning.validate()?;
        let play_area = PlayArea::from_viewport(viewport_width, viewport_height)?;
        log::info!(
            "game created: play area {:.2}x{:.2}, seed {seed}",
            play_area.width(),
            play_area.height()
        );
        Ok(Self {
            phase: GamePhase::NotStarted,
            world: World::new(play_area, &tuning, seed),
            clock: FrameClock::new(),
            tuning,
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    fn check_live(&self) -> Result<(), GameError> {
        if self.phase == GamePhase::Disposed {
            return Err(GameError::AlreadyDisposed);
        }
        Ok(())
    }

    /// Start trigger: NotStarted → Running. A no-op when already running
    /// or paused (the host may wire this to every tap).
    pub fn start(&mut self) -> Result<(), GameError> {
        self.check_live()?;
        if self.phase == GamePhase::NotStarted {
            self.phase = GamePhase::Running;
            self.clock.reset();
            log::info!("game started");
        }
        Ok(())
    }

    /// Running → Paused
    pub fn pause(&mut self) -> Result<(), GameError> {
        self.check_live()?;
        if self.phase == GamePhase::Running {
            self.phase = GamePhase::Paused;
            log::info!("game paused");
        }
        Ok(())
    }

    /// Paused → Running
    pub fn resume(&mut self) -> Result<(), GameError> {
        self.check_live()?;
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Running;
            self.clock.reset();
            log::info!("game resumed");
        }
        Ok(())
    }

    /// Advance one frame using the internal wall clock. The host calls this
    /// once per animation frame.
    pub fn tick(&mut self) -> Result<(), GameError> {
        // Sample the clock in every live phase so paused/not-started time
        // never accumulates into one giant post-resume delta
        self.check_live()?;
        let delta = self.clock.tick();
        self.advance(delta)
    }

    /// Advance one frame with a host-supplied delta (the deterministic
    /// path; `tick()` delegates here)
    pub fn advance(&mut self, delta: f32) -> Result<(), GameError> {
        self.check_live()?;
        if self.phase != GamePhase::Running {
            return Ok(());
        }
        tick(&mut self.world, delta.max(0.0), &self.tuning);
        Ok(())
    }

    /// Pointer/touch press in world coordinates
    pub fn on_input_start(&mut self, world_x: f32, world_y: f32) -> Result<(), GameError> {
        self.check_live()?;
        self.world
            .controller
            .press(Vec2::new(world_x, world_y), &self.world.catcher);
        Ok(())
    }

    /// Pointer/touch move in world coordinates; only moves the catcher
    /// while a drag is active
    pub fn on_input_move(&mut self, world_x: f32, world_y: f32) -> Result<(), GameError> {
        self.check_live()?;
        let area = self.world.play_area;
        self.world.controller.drag_to(
            Vec2::new(world_x, world_y),
            &mut self.world.catcher,
            &area,
        );
        Ok(())
    }

    /// Pointer/touch release
    pub fn on_input_end(&mut self) -> Result<(), GameError> {
        self.check_live()?;
        self.world.controller.release();
        Ok(())
    }

    /// Recompute play-area bounds for a new viewport
    pub fn on_resize(&mut self, viewport_width: f32, viewport_height: f32) -> Result<(), GameError> {
        self.check_live()?;
        let play_area = PlayArea::from_viewport(viewport_width, viewport_height)?;
        self.world.resize(play_area);
        log::debug!(
            "resized: play area {:.2}x{:.2}",
            play_area.width(),
            play_area.height()
        );
        Ok(())
    }

    /// Current render state
    pub fn snapshot(&self) -> Result<Snapshot, GameError> {
        self.check_live()?;
        Ok(Snapshot {
            catcher_pos: self.world.catcher.pos,
            objects: self
                .world
                .pool
                .objects()
                .iter()
                .map(|o| ObjectView {
                    id: o.id,
                    category: o.category,
                    pos: o.pos,
                    rotation: o.rotation,
                })
                .collect(),
            score: self.world.ledger.total(),
        })
    }

    /// Release the session. Terminal and idempotent; every other operation
    /// fails afterwards. The host must stop feeding ticks and input once
    /// this returns.
    pub fn dispose(&mut self) {
        if self.phase != GamePhase::Disposed {
            log::info!(
                "game disposed after {} ticks, final score {}",
                self.world.time_ticks,
                self.world.ledger.total()
            );
            self.phase = GamePhase::Disposed;
            self.world.controller.release();
        }
    }

    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
