//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Tick-based physics (one step per frame)
//! - Seeded RNG only
//! - Stable obstacle order (spawn order)
//! - No rendering, storage or platform dependencies

pub mod collision;
pub mod game_loop;
pub mod state;
pub mod tick;

pub use collision::check;
pub use game_loop::{DEFAULT_SEED, FrameResult, GameLoop};
pub use state::{Ball, GamePhase, Obstacle, ObstacleKind, TerminalCause, World, WorldSnapshot};
pub use tick::{Terminal, apply_tap, spawn_obstacle, terminal_transition, tick};
