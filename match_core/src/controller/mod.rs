//! Paddle controllers.
//!
//! A [`Controller`] turns either held keys ([`InputController`]) or the ball's position ([`AiController`]) into
//! paddle movement. The match forwards every key event to both controllers and lets each decide relevance.

pub mod ai;
pub mod input;

pub use ai::AiController;
pub use input::InputController;

use glam::Vec2;
use hecs::{Entity, World};
use serde::Deserialize;

use crate::components::{Ball, Paddle};
use crate::config::Config;
use crate::error::InitError;
use crate::pitch::Pitch;
use crate::side::Side;

/// Key codes understood by the core. Window toolkits map their own codes onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Key {
    W,
    S,
    Up,
    Down,
    Other(u32),
}

/// Everything a controller may touch during one frame update.
pub struct ControlContext<'a> {
    pub world: &'a mut World,
    pub pitch: &'a Pitch,
    pub config: &'a Config,
    pub ball: Entity,
}

impl ControlContext<'_> {
    pub fn ball_pos(&self) -> Option<Vec2> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| ball.pos)
    }

    pub fn paddle_pos(&self, paddle: Entity) -> Option<Vec2> {
        self.world.get::<&Paddle>(paddle).ok().map(|paddle| paddle.pos)
    }

    /// Move `paddle` by `dy` within the pitch. Returns the distance actually travelled.
    pub fn move_paddle(&mut self, paddle: Entity, dy: f32, dt: f32) -> f32 {
        match self.world.get::<&mut Paddle>(paddle) {
            Ok(mut paddle) => paddle.move_by(dy, dt, self.pitch),
            Err(_) => 0.0,
        }
    }
}

/// Capability shared by every paddle driver
pub trait Controller {
    /// Prepare for play. Called at match start and again on the conceding side after each goal.
    fn initialise(&mut self) -> Result<(), InitError>;

    /// Apply this frame's movement to the controlled paddle
    fn update(&mut self, dt: f32, ctx: &mut ControlContext<'_>);

    fn on_key_pressed(&mut self, key: Key);

    fn on_key_released(&mut self, key: Key);

    /// Short name for logs
    fn name(&self) -> &str;
}

/// Which controller drives a side, chosen when the match is built
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ControllerKind {
    Input { up: Key, down: Key },
    Ai,
}

impl ControllerKind {
    pub fn default_for(side: Side) -> Self {
        match side {
            Side::Left => Self::Input {
                up: Key::W,
                down: Key::S,
            },
            Side::Right => Self::Ai,
        }
    }

    pub fn build(self, paddle: Entity, config: &Config) -> Box<dyn Controller> {
        match self {
            Self::Input { up, down } => Box::new(InputController::new(paddle, up, down)),
            Self::Ai => Box::new(AiController::new(paddle, config.ai_speed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_kinds_put_human_on_the_left() {
        assert!(matches!(
            ControllerKind::default_for(Side::Left),
            ControllerKind::Input { .. }
        ));
        assert_eq!(ControllerKind::default_for(Side::Right), ControllerKind::Ai);
    }

    #[test]
    fn test_build_picks_implementation() {
        let mut world = World::new();
        let paddle = world.spawn((Paddle::new(Side::Left),));
        let config = Config::new();

        let human = ControllerKind::default_for(Side::Left).build(paddle, &config);
        let ai = ControllerKind::Ai.build(paddle, &config);
        assert_eq!(human.name(), "input");
        assert_eq!(ai.name(), "ai");
    }
}
