//! Game state and core simulation types
//!
//! Entities are built once per game. A reset rewrites their mutable fields in
//! place; the brick grid is never reallocated and bricks are only ever hidden.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::config::GameConfig;

/// Current phase of the game lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first start
    Idle,
    /// Ball resting on the paddle, waiting for launch
    Ready,
    /// Ball moving under physics
    Launched,
    /// Every brick destroyed
    Won,
    /// Out of lives
    Lost,
}

impl GamePhase {
    /// Won or Lost - nothing simulates until a start or reset
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// Outcomes reported by the physics step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off a side or the top wall
    WallBounce,
    /// Ball bounced off the paddle
    PaddleBounce,
    /// Brick at `index` (grid order) was hidden
    BrickDestroyed { index: usize, points: u32 },
    /// Ball left through the bottom of the field
    BallLost,
}

/// The player's paddle (fixed y, moves horizontally)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Pixels per tick
    pub speed: f32,
}

impl Paddle {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: (config.field_width - config.paddle_width) / 2.0,
            y: config.paddle_y(),
            width: config.paddle_width,
            height: config.paddle_height,
            speed: config.paddle_speed,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Largest legal left edge
    #[inline]
    pub fn max_x(&self, field_width: f32) -> f32 {
        (field_width - self.width).max(0.0)
    }

    /// Shift by `steps * speed`, keeping the paddle inside the field
    pub fn move_by(&mut self, steps: f32, field_width: f32) {
        self.x = (self.x + steps * self.speed).clamp(0.0, self.max_x(field_width));
    }

    /// Re-center horizontally
    pub fn recenter(&mut self, field_width: f32) {
        self.x = ((field_width - self.width) / 2.0).clamp(0.0, self.max_x(field_width));
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
    /// Velocity magnitude once launched
    pub speed: f32,
}

impl Ball {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: config.ball_radius,
            speed: config.ball_speed,
        }
    }

    /// Park the ball above the paddle center with zero velocity
    pub fn rest_on(&mut self, paddle: &Paddle, rest_gap: f32) {
        self.pos = Vec2::new(paddle.center_x(), paddle.y - rest_gap);
        self.vel = Vec2::ZERO;
    }
}

/// Row colours, cycled by row index
pub const BRICK_COLORS: [&str; 6] = [
    "#ff6b6b", "#4ecdc4", "#45b7d1", "#96ceb4", "#feca57", "#ff9ff3",
];

/// A destructible brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    /// Row in the grid (0 = top)
    pub row: usize,
    pub col: usize,
    pub points: u32,
    pub visible: bool,
}

impl Brick {
    /// Colour class for the renderer
    pub fn color(&self) -> &'static str {
        BRICK_COLORS[self.row % BRICK_COLORS.len()]
    }
}

/// Lay out the rows x cols grid in row-major order
pub fn build_bricks(config: &GameConfig) -> Vec<Brick> {
    let offset_left = config.brick_offset_left();
    let mut bricks = Vec::with_capacity(config.brick_rows * config.brick_cols);

    for row in 0..config.brick_rows {
        for col in 0..config.brick_cols {
            bricks.push(Brick {
                rect: Rect::new(
                    offset_left + col as f32 * (config.brick_width + config.brick_padding),
                    config.brick_offset_top + row as f32 * (config.brick_height + config.brick_padding),
                    config.brick_width,
                    config.brick_height,
                ),
                row,
                col,
                points: config.points_for_row(row),
                visible: true,
            });
        }
    }

    bricks
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
    /// Ticks simulated while Ready or Launched
    pub time_ticks: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Row-major grid, fixed length for the life of the game
    pub bricks: Vec<Brick>,
}

impl GameState {
    /// Build a fresh game in the Idle phase
    pub fn new(config: GameConfig) -> Self {
        let paddle = Paddle::new(&config);
        let mut ball = Ball::new(&config);
        ball.rest_on(&paddle, config.ball_rest_gap);

        Self {
            phase: GamePhase::Idle,
            score: 0,
            lives: config.starting_lives,
            time_ticks: 0,
            paddle,
            ball,
            bricks: build_bricks(&config),
            config,
        }
    }

    /// Rewrite every mutable field to its starting value (grid kept in place)
    pub(crate) fn reinitialize(&mut self) {
        self.score = 0;
        self.lives = self.config.starting_lives;
        self.time_ticks = 0;
        self.paddle.recenter(self.config.field_width);
        self.ball.rest_on(&self.paddle, self.config.ball_rest_gap);
        for brick in &mut self.bricks {
            brick.visible = true;
        }
    }

    /// Put the ball back on the paddle
    pub fn rest_ball(&mut self) {
        self.ball.rest_on(&self.paddle, self.config.ball_rest_gap);
    }

    pub fn remaining_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.visible).count()
    }

    pub fn all_bricks_cleared(&self) -> bool {
        self.bricks.iter().all(|b| !b.visible)
    }
}
