//! Mountain Hop - A side-scrolling tap-to-jump arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, scoring)
//! - `platform`: Host collaborators (clock, frame scheduling, session glue)
//! - `persistence`: High score storage
//! - `tuning`: Data-driven game balance and viewport validation

pub mod error;
pub mod persistence;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use error::{ConfigError, PersistError};
pub use persistence::{HighScoreStore, JsonFileStore, MemoryStore};
pub use platform::Session;
pub use sim::{FrameResult, GameLoop, GamePhase, WorldSnapshot};
pub use tuning::{Tuning, Viewport};

/// Game configuration constants
pub mod consts {
    /// Downward acceleration added to the ball's velocity every tick
    pub const GRAVITY: f32 = 2.5;
    /// Velocity set on every tap (negative is up)
    pub const JUMP_IMPULSE: f32 = -40.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 50.0;
    /// How far past the top/bottom edge the ball may travel before a reset
    pub const OFF_SCREEN_MARGIN: f32 = 100.0;

    /// Background scroll per tick (pixels, leftward)
    pub const BACKGROUND_SCROLL: f32 = -5.0;

    /// Obstacle defaults
    pub const SPAWN_CHANCE: f64 = 0.03;
    pub const OBSTACLE_SPEED: f32 = 10.0;
    /// Keep spawned obstacles this far from the top and bottom edges
    pub const SPAWN_MARGIN: f32 = 100.0;
    pub const BIRD_SIZE: (f32, f32) = (96.0, 96.0);
    pub const COW_SIZE: (f32, f32) = (140.0, 100.0);

    /// Score cadence
    pub const SCORE_INTERVAL_MS: u64 = 1000;
    /// Target frame cadence (~60 Hz)
    pub const FRAME_INTERVAL_MS: u64 = 16;
}
