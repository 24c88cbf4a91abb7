//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per rendered frame, fixed per-tick displacement
//! - Seeded RNG only
//! - Stable iteration order (brick grid order)
//! - No rendering or platform dependencies

pub mod geometry;
pub mod lifecycle;
pub mod physics;
pub mod state;
pub mod tick;

pub use geometry::{ImpactSide, Rect, circle_rect_overlap, classify_impact_side, paddle_deflection};
pub use lifecycle::{Message, MessageTone};
pub use state::{BRICK_COLORS, Ball, Brick, GameEvent, GamePhase, GameState, Paddle, build_bricks};
pub use tick::{FrameView, Game, TickInput, autopilot_input, tick};
