//! Fixed timestep simulation tick
//!
//! One call advances the whole pipeline: orientation sensing, kinematics,
//! wall proximity, hole capture, playfield containment.

use crate::sim::hole;
use crate::sim::kinematics;
use crate::sim::proximity;
use crate::sim::state::SimState;
use crate::sim::surface::Surface;

/// Tilt sample for a single tick: two signed axis speeds in
/// pixel/s-equivalent units, as delivered by the host's sensor readout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub x_speed: f32,
    pub y_speed: f32,
}

/// What the renderer needs to know about a tick beyond the state snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickReport {
    /// The discrete orientation changed; the previous indicator is stale
    pub orientation_changed: bool,
    /// The hole swallowed the ball this tick
    pub captured: bool,
}

/// Advance the simulation by one fixed timestep.
pub fn tick<S: Surface>(
    state: &mut SimState,
    input: &TickInput,
    surface: &S,
    dt: f32,
) -> TickReport {
    let elapsed_ms = (dt * 1000.0).round() as u32;
    let (orientation, orientation_changed) = state.classifier.classify(
        input.x_speed,
        input.y_speed,
        state.maze.orientation,
        elapsed_ms,
    );
    if orientation_changed {
        state.maze.previous_orientation = state.maze.orientation;
        state.maze.orientation = orientation;
    }

    kinematics::advance(&mut state.ball, state.maze.orientation, dt);
    proximity::check_and_respond(&mut state.ball, &state.maze.config, surface, dt);
    let captured = hole::update(
        &mut state.ball,
        state.maze.config.hole_center,
        state.maze.config.hole_radius,
    );

    // The rectangle invariant is a hard guarantee, not a typical outcome;
    // whatever the scan missed is clamped out here.
    state.ball.pos = state.maze.config.clamp_to_playfield(state.ball.pos);

    state.time_ticks += 1;

    TickReport {
        orientation_changed,
        captured,
    }
}
