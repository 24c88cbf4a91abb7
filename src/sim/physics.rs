//! One physics tick for a launched ball
//!
//! Integrates the ball, then resolves walls, the bottom exit, the paddle and
//! finally the brick grid, in that order. Outcomes are reported as
//! [`GameEvent`]s; score and lives are never touched here.

use glam::Vec2;

use super::geometry::{circle_rect_overlap, classify_impact_side, paddle_deflection, reflect_for_side};
use super::state::{Ball, Brick, GameEvent, Paddle};
use crate::config::GameConfig;

/// Advance the ball one tick and resolve its collisions
pub fn step(
    ball: &mut Ball,
    paddle: &Paddle,
    bricks: &mut [Brick],
    config: &GameConfig,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let r = ball.radius;

    ball.pos += ball.vel;

    // Side walls
    if ball.pos.x <= r || ball.pos.x >= config.field_width - r {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = ball.pos.x.clamp(r, (config.field_width - r).max(r));
        events.push(GameEvent::WallBounce);
    }

    // Top wall
    if ball.pos.y <= r {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = r;
        events.push(GameEvent::WallBounce);
    }

    // Bottom is an exit, not a wall
    if ball.pos.y > config.field_height {
        log::debug!("Ball lost at x={:.1}", ball.pos.x);
        events.push(GameEvent::BallLost);
        return events;
    }

    if hits_paddle(ball, paddle) {
        let half_width = paddle.width / 2.0;
        let hit_pos = if half_width > 0.0 {
            ((ball.pos.x - paddle.center_x()) / half_width).clamp(-1.0, 1.0)
        } else {
            0.0
        };
        ball.vel = paddle_deflection(hit_pos, ball.speed, config.max_deflection);
        // Lift clear of the paddle so the next tick can't re-trigger
        ball.pos.y = paddle.y - r;
        events.push(GameEvent::PaddleBounce);
    }

    // First visible brick in grid order wins; at most one per tick
    if let Some((index, brick)) = bricks
        .iter_mut()
        .enumerate()
        .find(|(_, b)| b.visible && circle_rect_overlap(ball.pos, r, &b.rect))
    {
        brick.visible = false;
        let side = classify_impact_side(ball.pos, &brick.rect);
        ball.vel = reflect_for_side(ball.vel, side);
        log::debug!("Brick {} (row {}) destroyed, {:?} hit", index, brick.row, side);
        events.push(GameEvent::BrickDestroyed {
            index,
            points: brick.points,
        });
    }

    events
}

/// Ball's vertical span overlaps the paddle band and its center is over the paddle
fn hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let Vec2 { x, y } = ball.pos;
    y + ball.radius >= paddle.y
        && y - ball.radius <= paddle.y + paddle.height
        && x >= paddle.x
        && x <= paddle.x + paddle.width
}
