//! Wall proximity scanning and elastic response
//!
//! A discrete-sampling collision proxy: instead of solving for the exact
//! contact time, each tick samples a short pixel row or column just ahead of
//! the ball on each axis and bounces when any sample is wall-colored. Cost
//! per tick is a fixed number of surface queries regardless of speed, plus
//! one extra look-ahead sample for fast balls.

use crate::config::MazeConfig;
use crate::consts::{ELASTIC_K, FAST_MOTION_THRESHOLD, MIN_SPEED, PROXIMITY_MARGIN};
use crate::sim::state::Ball;
use crate::sim::surface::{Color, Surface};

/// The axis a wall would constrain: vertical walls constrain X motion,
/// horizontal walls constrain Y motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// Run both axis checks against the surface. Both run unconditionally; a
/// diagonal approach can bounce on X and Y in the same tick.
pub fn check_and_respond<S: Surface>(ball: &mut Ball, config: &MazeConfig, surface: &S, dt: f32) {
    check_axis(ball, config, surface, dt, Axis::X);
    check_axis(ball, config, surface, dt, Axis::Y);
}

fn check_axis<S: Surface>(
    ball: &mut Ball,
    config: &MazeConfig,
    surface: &S,
    dt: f32,
    axis: Axis,
) {
    let radius = config.ball_radius as i32;
    let (speed, along, across) = match axis {
        Axis::X => (ball.vel.x, ball.pos.x, ball.pos.y),
        Axis::Y => (ball.vel.y, ball.pos.y, ball.pos.x),
    };

    // Scan ahead of the current motion; a resting axis looks forward.
    let dir: i32 = if speed.abs() < MIN_SPEED {
        1
    } else {
        speed.signum() as i32
    };
    let scan_line = along as i32 + dir * (radius + PROXIMITY_MARGIN);
    let across = across as i32;

    let mut hit = (across - radius..=across + radius)
        .any(|offset| wall_at(surface, config, axis, scan_line, offset));

    // A ball covering more than a pixel per tick can step past the scan
    // line; look one pixel further along the travel direction.
    if !hit && (speed * dt).abs() > FAST_MOTION_THRESHOLD {
        hit = wall_at(surface, config, axis, scan_line + dir, across);
    }

    if hit {
        // Roll back this tick's displacement on the constrained axis so the
        // ball never embeds in the wall, then rebound with energy loss.
        let displacement = speed * dt;
        match axis {
            Axis::X => {
                ball.pos.x -= displacement;
                ball.vel.x = -ball.vel.x * ELASTIC_K;
            }
            Axis::Y => {
                ball.pos.y -= displacement;
                ball.vel.y = -ball.vel.y * ELASTIC_K;
            }
        }
    }
}

/// Sample one pixel, with the constrained-axis coordinate on `scan_line` and
/// the window offset on the other axis. Saturating casts plus the screen
/// clamp keep every query in bounds even while the position is transiently
/// outside the rectangle.
fn wall_at<S: Surface>(
    surface: &S,
    config: &MazeConfig,
    axis: Axis,
    scan_line: i32,
    across: i32,
) -> bool {
    let (x, y) = match axis {
        Axis::X => (scan_line, across),
        Axis::Y => (across, scan_line),
    };
    let x = x.clamp(0, config.screen_width - 1);
    let y = y.clamp(0, config.screen_height - 1);
    surface.color_at(x, y) == Color::WALL
}
