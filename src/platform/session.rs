//! Host session glue
//!
//! Wires a [`GameLoop`] to its collaborators. The scheduler is armed exactly
//! when a tap starts a run and cancelled exactly when a run ends. High score
//! saves are fire-and-forget: a failed save is logged and play continues.

use super::clock::Clock;
use super::scheduler::FrameScheduler;
use crate::error::ConfigError;
use crate::persistence::HighScoreStore;
use crate::sim::{FrameResult, GameLoop, GamePhase, WorldSnapshot};
use crate::tuning::{Tuning, Viewport};

pub struct Session<S, F, C> {
    game: GameLoop,
    store: S,
    scheduler: F,
    clock: C,
}

impl<S, F, C> Session<S, F, C>
where
    S: HighScoreStore,
    F: FrameScheduler,
    C: Clock,
{
    /// Load the stored high score and build the game around it
    pub fn new(
        tuning: Tuning,
        viewport: Viewport,
        seed: u64,
        store: S,
        scheduler: F,
        clock: C,
    ) -> Result<Self, ConfigError> {
        let high_score = store.load_high_score().unwrap_or_else(|e| {
            log::warn!("Failed to load high score, starting from 0: {}", e);
            0
        });
        let game = GameLoop::with_tuning(tuning, viewport, high_score, seed)?;
        Ok(Self {
            game,
            store,
            scheduler,
            clock,
        })
    }

    /// Forward a tap. Starting a run arms the frame scheduler.
    pub fn tap(&mut self) {
        if self.game.on_tap() {
            self.scheduler.schedule_next_frame(self.clock.now_ms());
        }
    }

    /// Run a frame if the scheduler says one is due
    pub fn pump(&mut self) -> Option<FrameResult> {
        let delta = self.scheduler.poll(self.clock.now_ms())?;
        Some(self.frame(delta))
    }

    /// Advance one frame, then persist and disarm as the result requires
    pub fn frame(&mut self, delta_ms: u64) -> FrameResult {
        let result = self.game.on_frame(delta_ms);

        if result.high_score_changed {
            if let Err(e) = self.store.save_high_score(result.snapshot.high_score) {
                log::warn!("Failed to save high score {}: {}", result.snapshot.high_score, e);
            }
        }
        if result.terminal.is_some() {
            self.scheduler.cancel_frame();
        }

        result
    }

    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), ConfigError> {
        self.game.on_resize(width, height)
    }

    /// Current view, for idle rendering between frames
    pub fn snapshot(&self) -> WorldSnapshot {
        self.game.snapshot()
    }

    pub fn phase(&self) -> GamePhase {
        self.game.phase()
    }

    pub fn game(&self) -> &GameLoop {
        &self.game
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
