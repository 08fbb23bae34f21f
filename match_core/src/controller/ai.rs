//! Ball-tracking paddle control

use hecs::Entity;

use super::{ControlContext, Controller, Key};
use crate::error::InitError;

/// Chases the ball's current height at a bounded speed.
///
/// Every update reads where the ball is now and steps toward it by at most `speed * dt`, stopping on it rather
/// than overshooting. [`Controller::initialise`] forgets the last height seen.
#[derive(Debug, Clone)]
pub struct AiController {
    paddle: Entity,
    speed: f32,
    target_y: Option<f32>,
}

impl AiController {
    pub fn new(paddle: Entity, speed: f32) -> Self {
        Self {
            paddle,
            speed,
            target_y: None,
        }
    }

    /// Ball height seen by the last update
    pub fn target_y(&self) -> Option<f32> {
        self.target_y
    }
}

impl Controller for AiController {
    fn initialise(&mut self) -> Result<(), InitError> {
        if !(self.speed > 0.0) || !self.speed.is_finite() {
            return Err(InitError::NonPositive {
                name: "ai_speed",
                value: self.speed,
            });
        }
        self.target_y = None;
        Ok(())
    }

    fn update(&mut self, dt: f32, ctx: &mut ControlContext<'_>) {
        if !(dt > 0.0) {
            return;
        }

        self.target_y = ctx.ball_pos().map(|ball| ball.y);
        let (Some(target), Some(paddle)) = (self.target_y, ctx.paddle_pos(self.paddle)) else {
            return;
        };
        let max_step = self.speed * dt;
        let delta = (target - paddle.y).clamp(-max_step, max_step);
        if delta != 0.0 {
            ctx.move_paddle(self.paddle, delta, dt);
        }
    }

    fn on_key_pressed(&mut self, _key: Key) {}

    fn on_key_released(&mut self, _key: Key) {}

    fn name(&self) -> &str {
        "ai"
    }
}
