//! Ball vs obstacle collision detection
//!
//! The ball is treated as an axis-aligned square of side `2 * radius` around
//! its center, so near obstacle corners it hits earlier than a true circle
//! would.

use super::state::{Ball, Obstacle};

/// True if the ball's bounding square overlaps the obstacle (edges touching count)
pub fn check(ball: &Ball, obstacle: &Obstacle) -> bool {
    let half = obstacle.size / 2.0;
    let dist = (ball.pos - obstacle.center()).abs();

    dist.x <= ball.radius + half.x && dist.y <= ball.radius + half.y
}
