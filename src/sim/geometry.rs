//! Collision geometry for a circular ball against axis-aligned rectangles
//!
//! The overlap test is a bounding-box approximation: the ball is treated as
//! its enclosing square, so corner contacts register slightly early. Impact
//! side classification is a cheap directional heuristic rather than a
//! time-of-impact solve.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Which pair of faces the ball struck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactSide {
    /// Left or right face - reflect horizontal velocity
    Horizontal,
    /// Top or bottom face - reflect vertical velocity
    Vertical,
}

/// True if the ball's bounding box touches the rectangle (edges inclusive)
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    center.x + radius >= rect.x
        && center.x - radius <= rect.right()
        && center.y + radius >= rect.y
        && center.y - radius <= rect.bottom()
}

/// Classify the impact by comparing the center offset against the rect's aspect
///
/// `|width * dy|` vs `|height * dx|`: the width-scaled vertical term winning
/// means the ball sits above or below the rect. Ties go to `Vertical`.
pub fn classify_impact_side(center: Vec2, rect: &Rect) -> ImpactSide {
    let offset = center - rect.center();
    let cross_width = (rect.width * offset.y).abs();
    let cross_height = (rect.height * offset.x).abs();

    if cross_width >= cross_height {
        ImpactSide::Vertical
    } else {
        ImpactSide::Horizontal
    }
}

/// Flip the velocity component normal to the struck faces
#[inline]
pub fn reflect_for_side(velocity: Vec2, side: ImpactSide) -> Vec2 {
    match side {
        ImpactSide::Horizontal => Vec2::new(-velocity.x, velocity.y),
        ImpactSide::Vertical => Vec2::new(velocity.x, -velocity.y),
    }
}

/// Velocity for a direction `angle` radians off straight up, at `speed`
#[inline]
pub fn velocity_from_angle(angle: f32, speed: f32) -> Vec2 {
    Vec2::new(angle.sin() * speed, -angle.cos() * speed)
}

/// Post-bounce velocity for a paddle hit at normalized position `hit_pos`
///
/// `hit_pos` is -1 at the paddle's left edge and 1 at its right edge; the
/// outgoing angle scales linearly up to `max_deflection`. The vertical
/// component is always upward.
pub fn paddle_deflection(hit_pos: f32, speed: f32, max_deflection: f32) -> Vec2 {
    let angle = hit_pos * max_deflection;
    Vec2::new(angle.sin() * speed, -(angle.cos() * speed).abs())
}
