use super::{check_collisions, check_goal};
use crate::{Ball, Config, Events, Paddle, Params, Pitch, Side};
use hecs::World;

/// Start-of-frame paddle housekeeping: clear recorded motion and clamp into the pitch
pub fn update_paddles(world: &mut World, pitch: &Pitch) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.update(pitch);
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, dt: f32) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * dt;
    }
}

/// Integrate the ball over `dt` in fixed sub-steps, resolving bounces after each one.
///
/// Returns the side whose goal edge the ball crossed, if any. Integration stops at the goal.
pub fn update_ball(
    world: &mut World,
    pitch: &Pitch,
    config: &Config,
    dt: f32,
    events: &mut Events,
) -> Option<Side> {
    if !dt.is_finite() || dt <= 0.0 {
        return None;
    }

    // Each sub-step is at most BALL_SUBSTEP_DT long
    let mut remaining_dt = dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(Params::BALL_SUBSTEP_DT);
        remaining_dt -= step_dt;

        move_ball(world, step_dt);
        check_collisions(world, pitch, config, events);
        if let Some(side) = check_goal(world, pitch) {
            return Some(side);
        }
    }
    None
}
