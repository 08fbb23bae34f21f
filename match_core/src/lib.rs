pub mod assets;
pub mod components;
pub mod config;
pub mod controller;
pub mod draw;
pub mod error;
pub mod game;
pub mod params;
pub mod pitch;
pub mod resources;
pub mod side;
pub mod systems;

pub use assets::*;
pub use components::*;
pub use config::*;
pub use controller::{AiController, ControlContext, Controller, ControllerKind, InputController, Key};
pub use draw::*;
pub use error::*;
pub use game::*;
pub use params::*;
pub use pitch::*;
pub use resources::*;
pub use side::*;

use hecs::World;

/// Helper to create a paddle entity standing in front of `side`'s goal
pub fn create_paddle(world: &mut World, side: Side, pitch: &Pitch, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::placed(side, pitch, config),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2, radius: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, radius),))
}
