//! Deterministic simulation module
//!
//! All maze logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Single-owner mutable state, threaded through `tick`
//! - No rendering or platform dependencies; the display is visible only
//!   through the read-only `Surface` query

pub mod hole;
pub mod kinematics;
pub mod orientation;
pub mod proximity;
pub mod state;
pub mod surface;
pub mod tick;

pub use orientation::OrientationClassifier;
pub use state::{Ball, Direction, Maze, SimState};
pub use surface::{Color, GridSurface, Surface};
pub use tick::{TickInput, TickReport, tick};
