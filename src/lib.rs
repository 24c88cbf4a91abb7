//! Brick Breaker - A single-screen paddle-and-ball arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game lifecycle)
//! - `platform`: Input collaborator plumbing (key snapshot per tick)
//! - `config`: Data-driven game dimensions and tuning

pub mod config;
pub mod platform;
pub mod sim;

pub use config::GameConfig;

/// Game configuration constants (defaults for [`GameConfig`])
pub mod consts {
    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    /// Pixels per tick
    pub const PADDLE_SPEED: f32 = 8.0;
    /// Distance from the bottom of the field to the paddle top
    pub const PADDLE_BOTTOM_OFFSET: f32 = 30.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Pixels per tick
    pub const BALL_SPEED: f32 = 6.0;
    /// Gap between the resting ball center and the paddle top
    pub const BALL_REST_GAP: f32 = 20.0;

    /// Brick grid layout
    pub const BRICK_ROWS: usize = 6;
    pub const BRICK_COLS: usize = 10;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 5.0;
    pub const BRICK_OFFSET_TOP: f32 = 60.0;
    /// Points awarded per row step (bottom row = 1 step)
    pub const POINTS_PER_ROW: u32 = 10;

    pub const STARTING_LIVES: u32 = 3;

    /// Launch angle is drawn from [-LAUNCH_SPREAD, LAUNCH_SPREAD] around straight up
    pub const LAUNCH_SPREAD: f32 = 0.25;
    /// Maximum paddle deflection (60 degrees)
    pub const MAX_DEFLECTION: f32 = std::f32::consts::FRAC_PI_3;
}
