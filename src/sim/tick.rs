//! Per-tick simulation step
//!
//! Advances the world by one frame while running: gravity, background
//! scroll, boundary checks, obstacle spawn/advance/retire, collisions and the
//! once-per-interval score. Everything here is total; the only side channel is
//! the returned [`Terminal`].

use rand::Rng;

use super::collision;
use super::state::{Ball, GamePhase, Obstacle, ObstacleKind, TerminalCause, World};
use crate::tuning::{Tuning, Viewport};

/// A run that just ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminal {
    pub cause: TerminalCause,
    /// The run's score beat the previous high score
    pub new_high_score: bool,
}

/// Handle a tap. Starts the run if waiting, and always resets velocity to the
/// jump impulse.
///
/// Returns true if this tap started a run.
pub fn apply_tap(world: &mut World, tuning: &Tuning, now_ms: u64) -> bool {
    let started = world.phase == GamePhase::WaitingToStart;
    if started {
        world.phase = GamePhase::Running;
        world.last_score_tick_ms = now_ms;
    }
    world.ball.jump(tuning.jump_impulse);
    started
}

/// Advance the world by one tick. No-op unless running.
pub fn tick<R: Rng>(
    world: &mut World,
    tuning: &Tuning,
    viewport: &Viewport,
    rng: &mut R,
    now_ms: u64,
) -> Option<Terminal> {
    if world.phase != GamePhase::Running {
        return None;
    }

    // Gravity
    world.ball.vel_y += tuning.gravity;
    world.ball.pos.y += world.ball.vel_y;

    // Scenery
    world.background_offset += tuning.background_scroll;
    if world.background_offset < -viewport.width {
        world.background_offset = 0.0;
    }

    if let Some(cause) = boundary_check(&world.ball, viewport, tuning) {
        return Some(terminal_transition(world, viewport, cause));
    }

    if rng.random_bool(tuning.spawn_chance) {
        spawn_obstacle(world, tuning, viewport, rng);
    }

    // Obstacles, oldest first. Retiring one keeps the others in spawn order.
    let mut i = 0;
    while i < world.obstacles.len() {
        let obstacle = &mut world.obstacles[i];
        obstacle.advance();
        if obstacle.is_off_screen() {
            log::debug!("Retired {:?} at x={}", obstacle.kind, obstacle.pos.x);
            world.obstacles.remove(i);
            continue;
        }
        if collision::check(&world.ball, &world.obstacles[i]) {
            return Some(terminal_transition(world, viewport, TerminalCause::Collision));
        }
        i += 1;
    }

    if now_ms.saturating_sub(world.last_score_tick_ms) >= tuning.score_interval_ms {
        world.score += 1;
        world.last_score_tick_ms = now_ms;
    }

    None
}

/// Floor contact first, then the off-screen margin on either side
fn boundary_check(ball: &Ball, viewport: &Viewport, tuning: &Tuning) -> Option<TerminalCause> {
    let top = ball.pos.y - ball.radius;
    let bottom = ball.pos.y + ball.radius;

    if bottom >= viewport.height {
        return Some(TerminalCause::Floor);
    }
    if top < -tuning.off_screen_margin || bottom > viewport.height + tuning.off_screen_margin {
        return Some(TerminalCause::OutOfBounds);
    }
    None
}

/// Commit the high score and reset the world to waiting. Every terminal cause
/// goes through here so they all land in `WaitingToStart`.
pub fn terminal_transition(
    world: &mut World,
    viewport: &Viewport,
    cause: TerminalCause,
) -> Terminal {
    let score = world.score;
    let new_high_score = world.reset(viewport);

    log::info!("Run ended ({:?}) with score {}", cause, score);
    if new_high_score {
        log::info!("New high score: {}", world.high_score);
    }

    Terminal {
        cause,
        new_high_score,
    }
}

/// Spawn one obstacle at the right edge with a random variant and height
pub fn spawn_obstacle<R: Rng>(
    world: &mut World,
    tuning: &Tuning,
    viewport: &Viewport,
    rng: &mut R,
) {
    let kind = if rng.random_bool(0.5) {
        ObstacleKind::Bird
    } else {
        ObstacleKind::Cow
    };

    // Keep a band at the top and bottom free so there is always a way past
    let span = viewport.height - 2.0 * tuning.spawn_margin;
    let top = if span > 0.0 {
        tuning.spawn_margin + rng.random_range(0.0..span)
    } else {
        viewport.height / 2.0
    };

    let obstacle = Obstacle::spawn(kind, viewport, top, tuning);
    log::debug!("Spawned {:?} at y={}", kind, top);
    world.obstacles.push(obstacle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0).unwrap()
    }

    /// Tuning with spawning disabled so tests control the obstacle list
    fn quiet_tuning() -> Tuning {
        Tuning {
            spawn_chance: 0.0,
            ..Default::default()
        }
    }

    fn running_world(tuning: &Tuning) -> World {
        let mut world = World::new(&viewport(), tuning, 0);
        world.phase = GamePhase::Running;
        world
    }

    fn obstacle(x: f32, y: f32) -> Obstacle {
        Obstacle {
            kind: ObstacleKind::Cow,
            pos: Vec2::new(x, y),
            size: Vec2::new(40.0, 40.0),
            speed: 10.0,
        }
    }

    #[test]
    fn test_tick_waiting_is_noop() {
        let tuning = Tuning::default();
        let mut world = World::new(&viewport(), &tuning, 4);
        let before = world.clone();
        let mut rng = Pcg32::seed_from_u64(1);

        for frame in 0..100 {
            assert!(tick(&mut world, &tuning, &viewport(), &mut rng, frame * 16).is_none());
        }
        assert_eq!(world, before);
    }

    #[test]
    fn test_tap_starts_and_jumps() {
        let tuning = Tuning::default();
        let mut world = World::new(&viewport(), &tuning, 0);

        assert!(apply_tap(&mut world, &tuning, 500));
        assert_eq!(world.phase, GamePhase::Running);
        assert_eq!(world.ball.vel_y, tuning.jump_impulse);
        assert_eq!(world.last_score_tick_ms, 500);

        // Second tap re-jumps without restarting the score timer
        world.ball.vel_y = 17.5;
        assert!(!apply_tap(&mut world, &tuning, 900));
        assert_eq!(world.ball.vel_y, tuning.jump_impulse);
        assert_eq!(world.last_score_tick_ms, 500);
    }

    #[test]
    fn test_gravity_accumulates() {
        let tuning = quiet_tuning();
        let mut world = running_world(&tuning);
        let mut rng = Pcg32::seed_from_u64(1);

        let mut last_vel = world.ball.vel_y;
        for _ in 0..5 {
            tick(&mut world, &tuning, &viewport(), &mut rng, 0);
            assert_eq!(world.ball.vel_y, last_vel + tuning.gravity);
            last_vel = world.ball.vel_y;
        }
        // 2.5 + 5.0 + 7.5 + 10.0 + 12.5
        assert_eq!(world.ball.pos.y, 300.0 + 37.5);
    }

    #[test]
    fn test_background_wraps() {
        let tuning = quiet_tuning();
        let mut world = running_world(&tuning);
        let mut rng = Pcg32::seed_from_u64(1);
        world.background_offset = -798.0;
        world.ball.vel_y = -2.5; // hover

        tick(&mut world, &tuning, &viewport(), &mut rng, 0);
        assert_eq!(world.background_offset, 0.0);

        tick(&mut world, &tuning, &viewport(), &mut rng, 0);
        assert_eq!(world.background_offset, -5.0);
    }

    #[test]
    fn test_floor_contact_resets() {
        let tuning = quiet_tuning();
        let mut world = running_world(&tuning);
        let mut rng = Pcg32::seed_from_u64(1);
        world.score = 9;
        world.high_score = 3;
        world.ball.pos.y = 600.0 - 50.0 - 2.5;
        world.obstacles.push(obstacle(700.0, 100.0));

        let terminal = tick(&mut world, &tuning, &viewport(), &mut rng, 0).unwrap();
        assert_eq!(terminal.cause, TerminalCause::Floor);
        assert!(terminal.new_high_score);
        assert_eq!(world.high_score, 9);
        assert_eq!(world.score, 0);
        assert_eq!(world.phase, GamePhase::WaitingToStart);
        assert_eq!(world.ball.pos, Vec2::new(400.0, 300.0));
        assert!(world.obstacles.is_empty());
    }

    #[test]
    fn test_out_of_bounds_above_resets_to_waiting() {
        let tuning = quiet_tuning();
        let mut world = running_world(&tuning);
        let mut rng = Pcg32::seed_from_u64(1);
        world.ball.pos.y = -40.0;
        world.ball.vel_y = -20.0;

        let terminal = tick(&mut world, &tuning, &viewport(), &mut rng, 0).unwrap();
        assert_eq!(terminal.cause, TerminalCause::OutOfBounds);
        assert!(!terminal.new_high_score);
        assert_eq!(world.phase, GamePhase::WaitingToStart);
        assert_eq!(world.ball.vel_y, 0.0);
    }

    #[test]
    fn test_collision_resets() {
        let tuning = quiet_tuning();
        let mut world = running_world(&tuning);
        let mut rng = Pcg32::seed_from_u64(1);
        world.score = 2;
        // Lands on the ball after one step left
        world.obstacles.push(obstacle(390.0, 290.0));

        let terminal = tick(&mut world, &tuning, &viewport(), &mut rng, 0).unwrap();
        assert_eq!(terminal.cause, TerminalCause::Collision);
        assert_eq!(world.high_score, 2);
        assert!(world.obstacles.is_empty());
    }

    #[test]
    fn test_retirement_preserves_order() {
        let tuning = quiet_tuning();
        let mut world = running_world(&tuning);
        let mut rng = Pcg32::seed_from_u64(1);
        world.ball.vel_y = -2.5;
        world.obstacles.push(obstacle(700.0, 0.0));
        world.obstacles.push(obstacle(-35.0, 0.0)); // right edge at 5, gone after one step
        world.obstacles.push(obstacle(600.0, 500.0));

        assert!(tick(&mut world, &tuning, &viewport(), &mut rng, 0).is_none());
        let xs: Vec<f32> = world.obstacles.iter().map(|o| o.pos.x).collect();
        assert_eq!(xs, vec![690.0, 590.0]);
    }

    #[test]
    fn test_score_once_per_interval() {
        let tuning = quiet_tuning();
        let mut world = running_world(&tuning);
        let mut rng = Pcg32::seed_from_u64(1);

        let mut now = 0;
        for _ in 0..62 {
            now += 16;
            world.ball.vel_y = -2.5;
            tick(&mut world, &tuning, &viewport(), &mut rng, now);
        }
        // 62 * 16 = 992ms
        assert_eq!(world.score, 0);

        now += 16;
        world.ball.vel_y = -2.5;
        tick(&mut world, &tuning, &viewport(), &mut rng, now);
        assert_eq!(world.score, 1);
        assert_eq!(world.last_score_tick_ms, now);
    }

    #[test]
    fn test_spawn_within_band() {
        let tuning = Tuning::default();
        let mut world = running_world(&tuning);
        let mut rng = Pcg32::seed_from_u64(42);

        for _ in 0..200 {
            spawn_obstacle(&mut world, &tuning, &viewport(), &mut rng);
        }
        assert_eq!(world.obstacles.len(), 200);
        for o in &world.obstacles {
            assert_eq!(o.pos.x, 800.0);
            assert!(o.pos.y >= 100.0 && o.pos.y < 500.0);
            assert_eq!(o.size, tuning.sprite_size(o.kind));
        }
        assert!(world.obstacles.iter().any(|o| o.kind == ObstacleKind::Bird));
        assert!(world.obstacles.iter().any(|o| o.kind == ObstacleKind::Cow));
    }

    #[test]
    fn test_spawn_short_viewport_uses_center() {
        let tuning = Tuning::default();
        let short = Viewport::new(800.0, 150.0).unwrap();
        let mut world = World::new(&short, &tuning, 0);
        let mut rng = Pcg32::seed_from_u64(7);

        spawn_obstacle(&mut world, &tuning, &short, &mut rng);
        assert_eq!(world.obstacles[0].pos.y, 75.0);
    }

    #[test]
    fn test_always_spawn() {
        let tuning = Tuning {
            spawn_chance: 1.0,
            ..Default::default()
        };
        let mut world = running_world(&tuning);
        let mut rng = Pcg32::seed_from_u64(3);
        world.ball.vel_y = -2.5;

        tick(&mut world, &tuning, &viewport(), &mut rng, 0);
        assert_eq!(world.obstacles.len(), 1);
        // Spawned then advanced in the same tick
        assert_eq!(world.obstacles[0].pos.x, 790.0);
    }
}
