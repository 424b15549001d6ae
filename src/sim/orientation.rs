//! Debounced tilt orientation sensing
//!
//! Converts noisy per-tick tilt samples into one of five stable directions.
//! After every reported change the classifier goes deaf for a fixed cooldown
//! so the indicator cannot chatter around the threshold.

use crate::consts::{ORIENTATION_COOLDOWN_MS, THRESHOLD_SPEED};
use crate::sim::state::Direction;

/// Orientation state machine. The cooldown countdown is explicit state,
/// decremented by the caller's tick interval.
#[derive(Debug, Clone, Default)]
pub struct OrientationClassifier {
    cooldown_ms: u32,
}

impl OrientationClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one tilt sample.
    ///
    /// `current` is the orientation in effect; returns the new orientation
    /// and whether it differs. While the cooldown from a prior change runs,
    /// the sample is ignored and `current` comes back unchanged.
    ///
    /// The axis with the larger magnitude drives the decision (ties go to
    /// X). A sample past the threshold selects that axis's direction, except
    /// that tilting through center from the opposite direction collapses to
    /// `Direction::None` rather than swinging straight across.
    pub fn classify(
        &mut self,
        x_speed: f32,
        y_speed: f32,
        current: Direction,
        elapsed_ms: u32,
    ) -> (Direction, bool) {
        if self.cooldown_ms > 0 {
            self.cooldown_ms = self.cooldown_ms.saturating_sub(elapsed_ms);
            return (current, false);
        }

        let next = if x_speed.abs() >= y_speed.abs() {
            if x_speed > THRESHOLD_SPEED {
                if current == Direction::Left {
                    Direction::None
                } else {
                    Direction::Right
                }
            } else if x_speed < -THRESHOLD_SPEED {
                if current == Direction::Right {
                    Direction::None
                } else {
                    Direction::Left
                }
            } else {
                current
            }
        } else if y_speed > THRESHOLD_SPEED {
            if current == Direction::Up {
                Direction::None
            } else {
                Direction::Down
            }
        } else if y_speed < -THRESHOLD_SPEED {
            if current == Direction::Down {
                Direction::None
            } else {
                Direction::Up
            }
        } else {
            current
        };

        let changed = next != current;
        if changed {
            self.cooldown_ms = ORIENTATION_COOLDOWN_MS;
        }
        (next, changed)
    }
}
