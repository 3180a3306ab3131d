//! World state and core simulation types
//!
//! The [`World`] is the single mutable aggregate the game loop owns. Renderers
//! only ever see a [`WorldSnapshot`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::{Tuning, Viewport};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball parked at center, waiting for the first tap
    #[default]
    WaitingToStart,
    /// Active gameplay
    Running,
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminalCause {
    /// Ball touched the bottom of the viewport
    Floor,
    /// Ball left the viewport by more than the off-screen margin
    OutOfBounds,
    /// Ball overlapped an obstacle
    Collision,
}

/// The player's ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Vertical velocity (pixels per tick, positive is down)
    pub vel_y: f32,
    pub radius: f32,
}

impl Ball {
    /// Ball at rest at the given position
    pub fn at_rest(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel_y: 0.0,
            radius,
        }
    }

    /// Set velocity to the jump impulse
    #[inline]
    pub fn jump(&mut self, impulse: f32) {
        self.vel_y = impulse;
    }
}

/// Obstacle variants (cosmetic only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Bird,
    Cow,
}

/// An obstacle scrolling in from the right edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Top-left corner
    pub pos: Vec2,
    /// Sprite size
    pub size: Vec2,
    /// Leftward distance per tick
    pub speed: f32,
}

impl Obstacle {
    /// Spawn at the right edge of the viewport with the given top edge
    pub fn spawn(kind: ObstacleKind, viewport: &Viewport, top: f32, tuning: &Tuning) -> Self {
        Self {
            kind,
            pos: Vec2::new(viewport.width, top),
            size: tuning.sprite_size(kind),
            speed: tuning.obstacle_speed,
        }
    }

    /// Move left by one tick
    #[inline]
    pub fn advance(&mut self) {
        self.pos.x -= self.speed;
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Right edge has passed the left edge of the viewport
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }
}

/// Complete world state (deterministic given the RNG seed and inputs)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub ball: Ball,
    /// Active obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Best score seen, never decreases
    pub high_score: u32,
    /// Horizontal scroll of the background, within (-width, 0]
    pub background_offset: f32,
    pub phase: GamePhase,
    /// Simulated time of the last score increment (ms)
    pub last_score_tick_ms: u64,
}

impl World {
    /// Fresh world with the ball centered in the viewport
    pub fn new(viewport: &Viewport, tuning: &Tuning, high_score: u32) -> Self {
        Self {
            ball: Ball::at_rest(viewport.center(), tuning.ball_radius),
            obstacles: Vec::new(),
            score: 0,
            high_score,
            background_offset: 0.0,
            phase: GamePhase::WaitingToStart,
            last_score_tick_ms: 0,
        }
    }

    /// Commit the high score, then put the world back to its waiting state.
    ///
    /// Returns true if a new high score was set.
    pub fn reset(&mut self, viewport: &Viewport) -> bool {
        let new_high = self.score > self.high_score;
        if new_high {
            self.high_score = self.score;
        }

        self.ball = Ball::at_rest(viewport.center(), self.ball.radius);
        self.obstacles.clear();
        self.score = 0;
        self.phase = GamePhase::WaitingToStart;

        new_high
    }

    /// Read-only view for renderers
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            ball_pos: self.ball.pos,
            ball_radius: self.ball.radius,
            obstacles: self.obstacles.clone(),
            score: self.score,
            high_score: self.high_score,
            phase: self.phase,
            background_offset: self.background_offset,
        }
    }
}

/// What a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub high_score: u32,
    pub phase: GamePhase,
    pub background_offset: f32,
}
