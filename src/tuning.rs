//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`] so hosts can rebalance the game
//! from a JSON file without rebuilding. Missing fields fall back to
//! [`crate::consts`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::ObstacleKind;

/// Viewport geometry supplied by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Validate host geometry. Physics and spawning assume positive, finite sizes.
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(ConfigError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// Center of the viewport (ball start position)
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Game balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Ball ===
    /// Added to velocity every tick
    pub gravity: f32,
    /// Velocity set by a tap (negative is up)
    pub jump_impulse: f32,
    pub ball_radius: f32,
    /// Out-of-bounds slack above and below the viewport
    pub off_screen_margin: f32,

    // === Scenery ===
    /// Background offset change per tick
    pub background_scroll: f32,

    // === Obstacles ===
    /// Per-tick spawn probability (0.0 - 1.0)
    pub spawn_chance: f64,
    /// Leftward distance per tick
    pub obstacle_speed: f32,
    pub spawn_margin: f32,
    /// Intrinsic sprite sizes, as decoded by the host
    pub bird_size: Vec2,
    pub cow_size: Vec2,

    // === Timing ===
    pub score_interval_ms: u64,
    pub frame_interval_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            ball_radius: BALL_RADIUS,
            off_screen_margin: OFF_SCREEN_MARGIN,

            background_scroll: BACKGROUND_SCROLL,

            spawn_chance: SPAWN_CHANCE,
            obstacle_speed: OBSTACLE_SPEED,
            spawn_margin: SPAWN_MARGIN,
            bird_size: Vec2::new(BIRD_SIZE.0, BIRD_SIZE.1),
            cow_size: Vec2::new(COW_SIZE.0, COW_SIZE.1),

            score_interval_ms: SCORE_INTERVAL_MS,
            frame_interval_ms: FRAME_INTERVAL_MS,
        }
    }
}

impl Tuning {
    /// Sprite size for an obstacle variant
    pub fn sprite_size(&self, kind: ObstacleKind) -> Vec2 {
        match kind {
            ObstacleKind::Bird => self.bird_size,
            ObstacleKind::Cow => self.cow_size,
        }
    }

    /// Parse and validate tuning from JSON
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json_str(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: &str) -> ConfigError {
            ConfigError::InvalidTuning {
                field,
                reason: reason.to_string(),
            }
        }

        if !self.background_scroll.is_finite() {
            return Err(invalid("background_scroll", "must be finite"));
        }
        if !(self.jump_impulse.is_finite() && self.jump_impulse < 0.0) {
            return Err(invalid("jump_impulse", "must be negative (upward)"));
        }

        let positive = [
            ("gravity", self.gravity),
            ("ball_radius", self.ball_radius),
            ("obstacle_speed", self.obstacle_speed),
            ("bird_size.x", self.bird_size.x),
            ("bird_size.y", self.bird_size.y),
            ("cow_size.x", self.cow_size.x),
            ("cow_size.y", self.cow_size.y),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, "must be positive"));
            }
        }

        let non_negative = [
            ("off_screen_margin", self.off_screen_margin),
            ("spawn_margin", self.spawn_margin),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(field, "must be non-negative"));
            }
        }

        if self.background_scroll > 0.0 {
            return Err(invalid("background_scroll", "must scroll leftward (<= 0)"));
        }
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(invalid("spawn_chance", "must be within 0.0 - 1.0"));
        }
        if self.score_interval_ms == 0 {
            return Err(invalid("score_interval_ms", "must be non-zero"));
        }
        if self.frame_interval_ms == 0 {
            return Err(invalid("frame_interval_ms", "must be non-zero"));
        }

        Ok(())
    }
}
