//! Keyboard-driven paddle control

use std::collections::HashSet;

use hecs::Entity;

use super::{ControlContext, Controller, Key};
use crate::error::InitError;

/// Moves its paddle while the bound keys are held. Both keys held cancel out.
#[derive(Debug, Clone)]
pub struct InputController {
    paddle: Entity,
    up: Key,
    down: Key,
    held: HashSet<Key>,
}

impl InputController {
    pub fn new(paddle: Entity, up: Key, down: Key) -> Self {
        Self {
            paddle,
            up,
            down,
            held: HashSet::new(),
        }
    }

    /// -1 = up, 0 = stop, 1 = down
    pub fn direction(&self) -> i8 {
        let up = self.held.contains(&self.up) as i8;
        let down = self.held.contains(&self.down) as i8;
        down - up
    }

    fn is_bound(&self, key: Key) -> bool {
        key == self.up || key == self.down
    }
}

impl Controller for InputController {
    fn initialise(&mut self) -> Result<(), InitError> {
        if self.up == self.down {
            return Err(InitError::ConflictingBindings(self.up));
        }
        Ok(())
    }

    fn update(&mut self, dt: f32, ctx: &mut ControlContext<'_>) {
        let dir = self.direction();
        if dir != 0 && dt > 0.0 {
            let delta = dir as f32 * ctx.config.paddle_speed * dt;
            ctx.move_paddle(self.paddle, delta, dt);
        }
    }

    fn on_key_pressed(&mut self, key: Key) {
        if self.is_bound(key) {
            self.held.insert(key);
        }
    }

    fn on_key_released(&mut self, key: Key) {
        self.held.remove(&key);
    }

    fn name(&self) -> &str {
        "input"
    }
}
