//! Ball kinematics: tilt-driven acceleration, friction, integration
//!
//! Pure unconstrained integration. Wall and hole constraints are layered on
//! afterwards by the proximity and hole passes, in that order.

use glam::Vec2;

use crate::consts::{FRICTION_DECEL, GRAVITY_ACCEL, MAX_SPEED, MIN_SPEED};
use crate::sim::state::{Ball, Direction};

/// Acceleration for a board orientation. Screen coordinates: y grows
/// downward, so `Up` accelerates toward smaller y.
fn gravity_for(orientation: Direction) -> Vec2 {
    match orientation {
        Direction::None => Vec2::ZERO,
        Direction::Up => Vec2::new(0.0, -GRAVITY_ACCEL),
        Direction::Down => Vec2::new(0.0, GRAVITY_ACCEL),
        Direction::Left => Vec2::new(-GRAVITY_ACCEL, 0.0),
        Direction::Right => Vec2::new(GRAVITY_ACCEL, 0.0),
    }
}

/// On a flat axis, friction opposes whatever speed remains; below MIN_SPEED
/// the axis snaps to rest instead of creeping forever.
fn friction_for(speed: &mut f32) -> f32 {
    if *speed >= MIN_SPEED {
        -FRICTION_DECEL
    } else if *speed <= -MIN_SPEED {
        FRICTION_DECEL
    } else {
        *speed = 0.0;
        0.0
    }
}

/// Advance velocity and position by one tick under the given orientation.
pub fn advance(ball: &mut Ball, orientation: Direction, dt: f32) {
    let mut accel = gravity_for(orientation);

    if accel.x == 0.0 {
        accel.x = friction_for(&mut ball.vel.x);
    }
    if accel.y == 0.0 {
        accel.y = friction_for(&mut ball.vel.y);
    }
    ball.accel = accel;

    ball.vel += accel * dt;
    ball.vel = ball
        .vel
        .clamp(Vec2::splat(-MAX_SPEED), Vec2::splat(MAX_SPEED));
    ball.pos += ball.vel * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    #[test]
    fn gravity_accelerates_along_the_tilted_axis() {
        let mut ball = Ball::at(Vec2::new(100.0, 100.0));
        advance(&mut ball, Direction::Up, SIM_DT);
        assert!(ball.vel.y < 0.0);
        assert_eq!(ball.vel.x, 0.0);
        assert!(ball.pos.y < 100.0);

        let mut ball = Ball::at(Vec2::new(100.0, 100.0));
        advance(&mut ball, Direction::Right, SIM_DT);
        assert!(ball.vel.x > 0.0);
        assert_eq!(ball.vel.y, 0.0);
        assert!(ball.pos.x > 100.0);
    }

    #[test]
    fn slow_axis_snaps_to_rest_and_stays_there() {
        let mut ball = Ball::at(Vec2::new(100.0, 100.0));
        ball.vel.x = 0.5; // below MIN_SPEED
        advance(&mut ball, Direction::None, SIM_DT);
        assert_eq!(ball.vel.x, 0.0);

        let pos = ball.pos;
        for _ in 0..10 {
            advance(&mut ball, Direction::None, SIM_DT);
        }
        assert_eq!(ball.vel.x, 0.0);
        assert_eq!(ball.pos, pos);
    }

    #[test]
    fn friction_decelerates_a_moving_flat_axis() {
        let mut ball = Ball::at(Vec2::new(100.0, 100.0));
        ball.vel.x = 10.0;
        advance(&mut ball, Direction::None, SIM_DT);
        assert!(ball.vel.x < 10.0);
        assert!(ball.vel.x > 0.0);

        // Friction drains the whole speed eventually, not asymptotically
        for _ in 0..1000 {
            advance(&mut ball, Direction::None, SIM_DT);
        }
        assert_eq!(ball.vel.x, 0.0);
    }

    #[test]
    fn velocity_components_clamp_at_max_speed() {
        let mut ball = Ball::at(Vec2::new(100.0, 100.0));
        for _ in 0..500 {
            advance(&mut ball, Direction::Down, SIM_DT);
            assert!(ball.vel.y <= MAX_SPEED);
        }
        assert_eq!(ball.vel.y, MAX_SPEED);
    }

    #[test]
    fn acceleration_is_recomputed_every_tick() {
        let mut ball = Ball::at(Vec2::new(100.0, 100.0));
        ball.accel = Vec2::new(999.0, 999.0);
        advance(&mut ball, Direction::None, SIM_DT);
        assert_eq!(ball.accel, Vec2::ZERO);

        advance(&mut ball, Direction::Left, SIM_DT);
        assert_eq!(ball.accel, Vec2::new(-GRAVITY_ACCEL, 0.0));
    }
}
