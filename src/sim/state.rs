//! Simulation state and core types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::MazeConfig;
use crate::sim::orientation::OrientationClassifier;

/// Discrete board tilt classification.
///
/// `None` covers both a genuinely flat board and the collapsed state after a
/// tilt reverses through center; the two are intentionally indistinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

/// The rolling ball. Mutated exactly once per tick, by the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center position, pixel space (y grows downward)
    pub pos: Vec2,
    /// Velocity [pixel/s]; each component within ±MAX_SPEED after a tick
    pub vel: Vec2,
    /// Acceleration applied this tick; recomputed from scratch every tick
    pub accel: Vec2,
    /// Center distance to the hole, refreshed each tick
    pub distance_to_hole: f32,
}

impl Ball {
    /// A ball at rest at `pos`
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            accel: Vec2::ZERO,
            distance_to_hole: f32::MAX,
        }
    }
}

/// Static geometry plus the current tilt classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Maze {
    /// Current discrete orientation
    pub orientation: Direction,
    /// Value before the most recent change; the renderer erases this
    /// indicator before drawing the current one
    pub previous_orientation: Direction,
    /// Geometry, immutable for the sim lifetime
    pub config: MazeConfig,
}

/// Complete simulation state. Single-owner: the host drives it through
/// `tick` once per fixed interval and reads snapshots between ticks.
#[derive(Debug, Clone)]
pub struct SimState {
    pub maze: Maze,
    pub ball: Ball,
    pub(crate) classifier: OrientationClassifier,
    /// Ticks advanced since construction
    pub time_ticks: u64,
}

impl SimState {
    /// Ball at rest at the maze center, flat board.
    pub fn new(config: MazeConfig) -> Self {
        let ball = Ball::at(config.center());
        Self {
            maze: Maze {
                orientation: Direction::None,
                previous_orientation: Direction::None,
                config,
            },
            ball,
            classifier: OrientationClassifier::new(),
            time_ticks: 0,
        }
    }

    /// True once the hole has swallowed the ball. Terminal: the sim keeps
    /// re-capturing every tick; resuming play means constructing a new state.
    pub fn captured(&self) -> bool {
        self.ball.distance_to_hole <= self.maze.config.hole_radius - 1.0
    }
}
