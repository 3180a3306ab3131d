//! Host-facing game loop
//!
//! [`GameLoop`] owns the world, the RNG and the simulated clock. A host drives
//! it with `on_tap` and `on_frame` from a single thread and draws whatever
//! snapshot comes back.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::state::{GamePhase, TerminalCause, World, WorldSnapshot};
use super::tick::{apply_tap, tick};
use crate::error::ConfigError;
use crate::tuning::{Tuning, Viewport};

/// Seed used by [`GameLoop::init`]
pub const DEFAULT_SEED: u64 = 0x5EED_CAFE;

/// Result of one `on_frame` call
#[derive(Debug, Clone, PartialEq)]
pub struct FrameResult {
    pub snapshot: WorldSnapshot,
    /// The host should persist `snapshot.high_score`
    pub high_score_changed: bool,
    /// Set when a run ended during this frame
    pub terminal: Option<TerminalCause>,
}

/// The simulation core
#[derive(Debug, Clone)]
pub struct GameLoop {
    world: World,
    tuning: Tuning,
    viewport: Viewport,
    rng: Pcg32,
    /// Simulated time, advanced by frame deltas (ms)
    now_ms: u64,
}

impl GameLoop {
    /// Default tuning, fixed seed
    pub fn init(width: f32, height: f32, initial_high_score: u32) -> Result<Self, ConfigError> {
        let viewport = Viewport::new(width, height)?;
        Self::with_tuning(Tuning::default(), viewport, initial_high_score, DEFAULT_SEED)
    }

    pub fn with_tuning(
        tuning: Tuning,
        viewport: Viewport,
        initial_high_score: u32,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        tuning.validate()?;
        let world = World::new(&viewport, &tuning, initial_high_score);
        log::info!(
            "Game loop ready: {}x{}, high score {}, seed {:#x}",
            viewport.width,
            viewport.height,
            initial_high_score,
            seed
        );
        Ok(Self {
            world,
            tuning,
            viewport,
            rng: Pcg32::seed_from_u64(seed),
            now_ms: 0,
        })
    }

    /// Tap input. Returns true if this tap started a run.
    pub fn on_tap(&mut self) -> bool {
        let started = apply_tap(&mut self.world, &self.tuning, self.now_ms);
        if started {
            log::info!("Run started");
        }
        started
    }

    /// Advance one frame. While waiting the world is left untouched.
    pub fn on_frame(&mut self, delta_ms: u64) -> FrameResult {
        self.now_ms = self.now_ms.saturating_add(delta_ms);

        let terminal = tick(
            &mut self.world,
            &self.tuning,
            &self.viewport,
            &mut self.rng,
            self.now_ms,
        );

        FrameResult {
            snapshot: self.world.snapshot(),
            high_score_changed: terminal.is_some_and(|t| t.new_high_score),
            terminal: terminal.map(|t| t.cause),
        }
    }

    /// New viewport size. The ball keeps its position until the next reset.
    pub fn on_resize(&mut self, width: f32, height: f32) -> Result<(), ConfigError> {
        self.viewport = Viewport::new(width, height)?;
        log::debug!("Viewport resized to {}x{}", width, height);
        Ok(())
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        self.world.snapshot()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn phase(&self) -> GamePhase {
        self.world.phase
    }

    pub fn high_score(&self) -> u32 {
        self.world.high_score
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Simulated milliseconds since construction
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }
}
