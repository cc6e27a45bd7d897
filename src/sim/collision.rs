//! Collision detection and response
//!
//! Walls reflect the ball vertically. Paddles send it back horizontally with
//! a vertical speed proportional to how far from the paddle's center it
//! struck, up to the ball's max velocity at the paddle's ends.
//!
//! Nothing here moves the ball out of what it hit. A ball that is still
//! overlapping a wall or paddle on the next check will be reflected again.

use super::state::{Ball, Paddle, Side};

/// Result of a collision check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionResult {
    /// Vertical velocity was flipped by the top or bottom wall
    pub wall: bool,
    /// Paddle the ball bounced off, if any
    pub paddle: Option<Side>,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self::default()
    }
}

/// Whether the ball touches or crosses the top or bottom of the field
#[inline]
pub fn touches_wall(ball: &Ball, field_height: f32) -> bool {
    ball.pos.y + ball.radius >= field_height || ball.pos.y - ball.radius <= 0.0
}

/// Whether the ball is in contact with a paddle on the given side
///
/// Only the ball's center height is tested against the paddle's span; the
/// horizontal test uses the ball's leading edge against the paddle's face.
pub fn ball_paddle_contact(ball: &Ball, paddle: &Paddle) -> bool {
    let in_span = paddle.pos.y <= ball.pos.y && ball.pos.y <= paddle.pos.y + paddle.height();
    if !in_span {
        return false;
    }
    match paddle.side {
        Side::Left => ball.pos.x - ball.radius <= paddle.pos.x + paddle.width(),
        Side::Right => ball.pos.x + ball.radius >= paddle.pos.x,
    }
}

/// Vertical speed after striking `paddle` at height `ball_y`
#[inline]
pub fn deflection_velocity(paddle: &Paddle, ball_y: f32, max_velocity: f32) -> f32 {
    let diff_y = paddle.center_y() - ball_y;
    let reduction = (paddle.height() / 2.0) / max_velocity;
    -1.0 * diff_y / reduction
}

/// Apply wall and paddle collisions to the ball's velocity
///
/// Only the paddle the ball is travelling toward is considered.
pub fn resolve(
    ball: &mut Ball,
    left: &Paddle,
    right: &Paddle,
    field_height: f32,
) -> CollisionResult {
    let mut result = CollisionResult::miss();

    if touches_wall(ball, field_height) {
        ball.vel.y *= -1.0;
        result.wall = true;
    }

    let paddle = if ball.vel.x < 0.0 { left } else { right };
    if ball_paddle_contact(ball, paddle) {
        ball.vel.x *= -1.0;
        ball.vel.y = deflection_velocity(paddle, ball.pos.y, ball.max_velocity);
        result.paddle = Some(paddle.side);
    }

    result
}
