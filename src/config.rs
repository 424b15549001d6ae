//! Maze geometry configuration
//!
//! Supplied to the simulation once at startup and immutable thereafter.
//! Loads from an optional JSON file; any missing field falls back to the
//! compiled defaults, which reproduce the reference 240x320 display with a
//! 198x198 maze centered on it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Static maze geometry: wall rectangle, hole, ball size.
///
/// `top_*`/`least_*` are the wall lines of the inner rectangle. The playable
/// band for the ball center is inset from them by the ball radius plus one
/// pixel on each side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Screen width in pixels
    pub screen_width: i32,
    /// Screen height in pixels
    pub screen_height: i32,
    /// Left wall x
    pub top_x: f32,
    /// Top wall y
    pub top_y: f32,
    /// Right wall x
    pub least_x: f32,
    /// Bottom wall y
    pub least_y: f32,
    /// Hole (sink) center
    pub hole_center: Vec2,
    /// Hole radius
    pub hole_radius: f32,
    /// Ball radius
    pub ball_radius: f32,
}

impl Default for MazeConfig {
    fn default() -> Self {
        let half = (MAZE_SIZE / 2) as f32;
        let cx = (SCREEN_WIDTH / 2) as f32;
        let cy = (SCREEN_HEIGHT / 2) as f32;
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            top_x: cx - half,
            top_y: cy - half,
            least_x: cx + half,
            least_y: cy + half,
            hole_center: Vec2::new(170.0, 220.0),
            hole_radius: HOLE_RADIUS,
            ball_radius: BALL_RADIUS,
        }
    }
}

impl MazeConfig {
    /// Load from a JSON file, falling back to defaults on any failure.
    pub fn load(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded maze config from {}", path);
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring malformed maze config {}: {}", path, e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No maze config at {}, using defaults", path);
                Self::default()
            }
        }
    }

    /// Center of the wall rectangle
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.top_x + self.least_x) / 2.0,
            (self.top_y + self.least_y) / 2.0,
        )
    }

    /// Smallest coordinate the ball center may occupy, per axis
    pub fn playable_min(&self) -> Vec2 {
        Vec2::new(self.top_x, self.top_y) + Vec2::splat(self.ball_radius + 1.0)
    }

    /// Largest coordinate the ball center may occupy, per axis
    pub fn playable_max(&self) -> Vec2 {
        Vec2::new(self.least_x, self.least_y) - Vec2::splat(self.ball_radius + 1.0)
    }

    /// Clamp a position into the playable rectangle
    pub fn clamp_to_playfield(&self, pos: Vec2) -> Vec2 {
        pos.clamp(self.playable_min(), self.playable_max())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_playable_band_is_inset_by_ball_radius() {
        let config = MazeConfig::default();
        assert_eq!(config.playable_min(), Vec2::new(28.0, 68.0));
        assert_eq!(config.playable_max(), Vec2::new(212.0, 252.0));
        assert_eq!(config.center(), Vec2::new(120.0, 160.0));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: MazeConfig = serde_json::from_str(r#"{"hole_radius": 12.0}"#).unwrap();
        assert_eq!(config.hole_radius, 12.0);
        assert_eq!(config.screen_width, SCREEN_WIDTH);
        assert_eq!(config.ball_radius, BALL_RADIUS);
    }

    #[test]
    fn clamp_to_playfield_saturates_out_of_range_positions() {
        let config = MazeConfig::default();
        let clamped = config.clamp_to_playfield(Vec2::new(-50.0, 1000.0));
        assert_eq!(clamped, Vec2::new(28.0, 252.0));
    }
}
