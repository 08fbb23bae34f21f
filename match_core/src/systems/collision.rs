use crate::{Ball, Config, Events, Paddle, Pitch};
use glam::Vec2;
use hecs::World;

/// Maximum deflection angle off a paddle edge, in radians (~45 degrees)
const MAX_DEFLECTION: f32 = 0.785;

/// Share of the paddle's vertical velocity transferred to the ball on contact
const PADDLE_INFLUENCE: f32 = 0.3;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, pitch: &Pitch, config: &Config, events: &mut Events) {
    // First, collect paddle data without holding borrows
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if bounce_off_walls(ball, pitch) {
            events.ball_hit_wall = true;
        }
        for paddle in &paddles {
            if bounce_off_paddle(ball, paddle, config) {
                events.ball_hit_paddle = Some(paddle.side);
                break;
            }
        }
    }
}

/// Reflect off the top and bottom walls. Returns true on contact.
pub fn bounce_off_walls(ball: &mut Ball, pitch: &Pitch) -> bool {
    let r = ball.radius;
    if ball.pos.y - r <= pitch.top() && ball.vel.y <= 0.0 {
        ball.pos.y = pitch.top() + r;
        ball.vel.y = -ball.vel.y;
        true
    } else if ball.pos.y + r >= pitch.bottom() && ball.vel.y >= 0.0 {
        ball.pos.y = pitch.bottom() - r;
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Send the ball back toward the center if it overlaps `paddle` while heading for that paddle's goal.
///
/// The new direction depends on where the ball struck (edges deflect more) and on the paddle's own motion.
/// Speed grows by `ball_speed_increase` up to `ball_speed_max`. Returns true on contact.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, config: &Config) -> bool {
    let half = paddle.size * 0.5;
    let dx = (ball.pos.x - paddle.pos.x).abs();
    let dy = (ball.pos.y - paddle.pos.y).abs();
    if dx >= half.x + ball.radius || dy >= half.y + ball.radius {
        return false;
    }

    // Only bounce when moving toward the paddle's goal
    let away = -paddle.side.sign();
    if ball.vel.x * away >= 0.0 {
        return false;
    }

    // Where on the paddle the ball hit, from -1 (top) to 1 (bottom)
    let hit_relative_y = ((ball.pos.y - paddle.pos.y) / half.y).clamp(-1.0, 1.0);

    let new_speed = (ball.speed() * config.ball_speed_increase).min(config.ball_speed_max);
    let y_deflection = hit_relative_y * MAX_DEFLECTION * new_speed;
    let paddle_influence = paddle.vel_y * PADDLE_INFLUENCE;

    let new_vel = Vec2::new(away * new_speed, y_deflection + paddle_influence);
    ball.vel = new_vel.normalize_or_zero() * new_speed;

    // Push ball out of paddle
    ball.pos.x = paddle.pos.x + away * (half.x + ball.radius);
    true
}
