//! Hole capture
//!
//! Runs last in the tick pipeline, so the hole swallows a ball even on a
//! tick where it would also have bounced.

use glam::Vec2;

use crate::sim::state::Ball;

/// Refresh `ball.distance_to_hole`, then capture when the ball center is
/// within `hole_radius - 1` of the sink: position snaps to the hole center
/// and velocity zeroes. Captured is terminal until the host resets the sim.
pub fn update(ball: &mut Ball, hole_center: Vec2, hole_radius: f32) -> bool {
    ball.distance_to_hole = ball.pos.distance(hole_center);
    if ball.distance_to_hole <= hole_radius - 1.0 {
        ball.pos = hole_center;
        ball.vel = Vec2::ZERO;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOLE: Vec2 = Vec2::new(170.0, 220.0);
    const RADIUS: f32 = 8.0;

    #[test]
    fn ball_inside_capture_radius_snaps_to_center_at_rest() {
        let mut ball = Ball::at(Vec2::new(170.0, 220.0 - (RADIUS - 1.0)));
        ball.vel = Vec2::new(30.0, -50.0);

        assert!(update(&mut ball, HOLE, RADIUS));
        assert_eq!(ball.pos, HOLE);
        assert_eq!(ball.vel, Vec2::ZERO);
    }

    #[test]
    fn ball_outside_capture_radius_is_untouched() {
        let start = Vec2::new(170.0, 220.0 - (RADIUS + 1.0));
        let mut ball = Ball::at(start);
        ball.vel = Vec2::new(30.0, -50.0);

        assert!(!update(&mut ball, HOLE, RADIUS));
        assert_eq!(ball.pos, start);
        assert_eq!(ball.vel, Vec2::new(30.0, -50.0));
        assert_eq!(ball.distance_to_hole, RADIUS + 1.0);
    }
}
