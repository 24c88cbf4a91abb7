//! Game configuration
//!
//! Every dimension and tuning value in one serializable struct. Missing
//! JSON fields fall back to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_bottom_offset: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub ball_rest_gap: f32,

    // === Bricks ===
    pub brick_rows: usize,
    pub brick_cols: usize,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset_top: f32,
    pub points_per_row: u32,

    // === Rules ===
    pub starting_lives: u32,
    /// Half-width of the launch angle range (radians)
    pub launch_spread: f32,
    /// Maximum paddle deflection from vertical (radians)
    pub max_deflection: f32,
    /// Seed for the launch-angle RNG
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            ball_rest_gap: BALL_REST_GAP,

            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_offset_top: BRICK_OFFSET_TOP,
            points_per_row: POINTS_PER_ROW,

            starting_lives: STARTING_LIVES,
            launch_spread: LAUNCH_SPREAD,
            max_deflection: MAX_DEFLECTION,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON (absent fields take their defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load a config file, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => log::warn!("Invalid config {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Cannot read config {}: {}", path.display(), e),
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Paddle top edge (fixed for the whole game)
    pub fn paddle_y(&self) -> f32 {
        self.field_height - self.paddle_bottom_offset
    }

    /// Left edge of the centred brick grid
    pub fn brick_offset_left(&self) -> f32 {
        let cols = self.brick_cols as f32;
        let grid_width = cols * (self.brick_width + self.brick_padding) - self.brick_padding;
        (self.field_width - grid_width) / 2.0
    }

    /// Points for a brick in `row` (row 0 is the top)
    pub fn points_for_row(&self, row: usize) -> u32 {
        (self.brick_rows.saturating_sub(row)) as u32 * self.points_per_row
    }

    /// Score for clearing every brick
    pub fn max_score(&self) -> u32 {
        (0..self.brick_rows)
            .map(|row| self.points_for_row(row) * self.brick_cols as u32)
            .sum()
    }
}
