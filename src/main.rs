//! Headless demo driver
//!
//! Stands in for the rendering/input host: draws the maze border (plus a
//! couple of interior walls) into a synthetic surface, feeds the sim a
//! seeded pseudo-random tilt walk, and logs what a renderer would draw.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use tilt_maze::config::MazeConfig;
use tilt_maze::consts::SIM_DT;
use tilt_maze::sim::{GridSurface, SimState, TickInput, tick};

/// Ten minutes of simulated time at 100 Hz
const DEMO_TICKS: u64 = 60_000;

fn build_surface(config: &MazeConfig) -> GridSurface {
    let mut surface = GridSurface::bordered(config);
    // Two interior walls so the demo has something to carom off
    surface.wall_vline(90, 61, 180);
    surface.wall_hline(120, 219, 200);
    surface
}

fn main() {
    env_logger::init();

    let config = MazeConfig::load("maze.json");
    let surface = build_surface(&config);
    let mut state = SimState::new(config);

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);
    let mut rng = Pcg32::seed_from_u64(seed);
    log::info!("Tilt maze demo starting with seed {}", seed);

    // Random tilt walk: both axis speeds wander, so the board sweeps
    // through tilted and flat phases.
    let mut tilt = TickInput::default();
    for _ in 0..DEMO_TICKS {
        tilt.x_speed = (tilt.x_speed + rng.random_range(-8.0..8.0)).clamp(-90.0, 90.0);
        tilt.y_speed = (tilt.y_speed + rng.random_range(-8.0..8.0)).clamp(-90.0, 90.0);

        let report = tick(&mut state, &tilt, &surface, SIM_DT);

        if report.orientation_changed {
            log::info!(
                "tick {}: orientation {:?} -> {:?}",
                state.time_ticks,
                state.maze.previous_orientation,
                state.maze.orientation
            );
        }
        if state.time_ticks % 500 == 0 {
            log::info!(
                "tick {}: ball at ({:.1}, {:.1}) vel ({:.1}, {:.1})",
                state.time_ticks,
                state.ball.pos.x,
                state.ball.pos.y,
                state.ball.vel.x,
                state.ball.vel.y
            );
        }
        if report.captured {
            log::info!("tick {}: ball captured by the hole", state.time_ticks);
            break;
        }
    }

    if !state.captured() {
        log::info!(
            "demo finished without a capture; ball ended at ({:.1}, {:.1})",
            state.ball.pos.x,
            state.ball.pos.y
        );
    }
}
