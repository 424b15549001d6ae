//! Tilt Maze - a ball rolling through a maze under board tilt
//!
//! Core modules:
//! - `sim`: Deterministic simulation (orientation sensing, ball kinematics,
//!   wall proximity, hole capture)
//! - `config`: Maze geometry supplied to the simulation at startup
//!
//! Rendering, display bring-up and raw input sampling belong to the host.
//! The simulation sees a per-tick tilt sample coming in and a read-only
//! pixel query going out; nothing else crosses the boundary.

pub mod config;
pub mod sim;

pub use config::MazeConfig;

/// Simulation tuning constants
pub mod consts {
    /// Fixed simulation timestep (100 Hz, matching the tilt sample rate)
    pub const SIM_DT: f32 = 0.01;

    /// Top ball speed per axis [pixel/s]
    pub const MAX_SPEED: f32 = 120.0;
    /// Below this speed a flat axis snaps to rest [pixel/s]
    pub const MIN_SPEED: f32 = 0.8;

    /// Acceleration due to gravity on a tilted axis [pixel/s^2]
    pub const GRAVITY_ACCEL: f32 = 60.0;
    /// Deceleration due to friction on a flat axis [pixel/s^2]
    pub const FRICTION_DECEL: f32 = 15.0;

    /// Tilt speed a sample must exceed to register as a deliberate tilt
    pub const THRESHOLD_SPEED: f32 = 40.0;
    /// Lockout after a reported orientation change [ms]
    pub const ORIENTATION_COOLDOWN_MS: u32 = 400;

    /// Fraction of speed retained (sign-inverted) after a wall bounce
    pub const ELASTIC_K: f32 = 0.75;
    /// Gap between the ball edge and the scanned pixel row/column [pixels]
    pub const PROXIMITY_MARGIN: i32 = 1;
    /// Projected per-tick displacement above which the scan looks one pixel
    /// further ahead [pixels]
    pub const FAST_MOTION_THRESHOLD: f32 = 1.0;

    /// Reference display width [pixels]
    pub const SCREEN_WIDTH: i32 = 240;
    /// Reference display height [pixels]
    pub const SCREEN_HEIGHT: i32 = 320;
    /// Side of the square maze, centered on screen [pixels]
    pub const MAZE_SIZE: i32 = 198;
    /// Ball radius [pixels]
    pub const BALL_RADIUS: f32 = 6.0;
    /// Hole (sink) radius [pixels]
    pub const HOLE_RADIUS: f32 = 8.0;
}
