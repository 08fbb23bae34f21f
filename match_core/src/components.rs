use glam::Vec2;
use rand::Rng;

use crate::config::Config;
use crate::error::InitError;
use crate::pitch::{Aabb, Pitch};
use crate::resources::GameRng;
use crate::side::Side;

/// Paddle component - one per side, driven by that side's controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,  // center
    pub size: Vec2, // full width and height
    pub vel_y: f32, // vertical motion applied this frame (units per second)
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            pos: Vec2::ZERO,
            size: Vec2::ZERO,
            vel_y: 0.0,
        }
    }

    /// Place the paddle in front of its goal edge, vertically centered
    pub fn initialise(&mut self, side: Side, pitch: &Pitch, config: &Config) -> Result<(), InitError> {
        if !(config.paddle_width > 0.0) {
            return Err(InitError::NonPositive {
                name: "paddle_width",
                value: config.paddle_width,
            });
        }
        if !(config.paddle_height > 0.0) || config.paddle_height > pitch.height() {
            return Err(InitError::PaddleTooTall {
                paddle: config.paddle_height,
                pitch: pitch.height(),
            });
        }
        let placed = Self::placed(side, pitch, config);
        let rect = placed.rect();
        let bounds = pitch.bounds();
        if !(config.paddle_inset < pitch.width() / 2.0) || !(bounds.contains(rect.min) && bounds.contains(rect.max)) {
            return Err(InitError::PaddleOffPitch {
                inset: config.paddle_inset,
                width: pitch.width(),
            });
        }
        *self = placed;
        Ok(())
    }

    /// Paddle sized from `config`, standing in front of `side`'s goal at mid height
    pub fn placed(side: Side, pitch: &Pitch, config: &Config) -> Self {
        Self {
            side,
            pos: Vec2::new(config.paddle_x(side, pitch), pitch.center().y),
            size: Vec2::new(config.paddle_width, config.paddle_height),
            vel_y: 0.0,
        }
    }

    pub fn half_height(&self) -> f32 {
        self.size.y / 2.0
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_center_size(self.pos, self.size)
    }

    /// Start-of-frame housekeeping: forget last frame's motion and stay inside the pitch
    pub fn update(&mut self, pitch: &Pitch) {
        self.vel_y = 0.0;
        self.pos.y = pitch.clamp_y(self.pos.y, self.half_height());
    }

    /// Move vertically by `dy`, clamped to the pitch. Returns the distance actually travelled.
    pub fn move_by(&mut self, dy: f32, dt: f32, pitch: &Pitch) -> f32 {
        let before = self.pos.y;
        self.pos.y = pitch.clamp_y(self.pos.y + dy, self.half_height());
        let moved = self.pos.y - before;
        if dt > 0.0 {
            self.vel_y = moved / dt;
        }
        moved
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub serve_towards: Option<Side>, // None = let the rng pick
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            serve_towards: None,
        }
    }

    pub fn initialise(&mut self, pitch: &Pitch, config: &Config) -> Result<(), InitError> {
        let diameter = config.ball_radius * 2.0;
        if !(config.ball_radius > 0.0) || diameter >= pitch.width() || diameter >= pitch.height() {
            return Err(InitError::BallTooLarge {
                radius: config.ball_radius,
                width: pitch.width(),
                height: pitch.height(),
            });
        }
        if !(config.ball_speed_initial > 0.0) {
            return Err(InitError::NonPositive {
                name: "ball_speed_initial",
                value: config.ball_speed_initial,
            });
        }
        self.radius = config.ball_radius;
        self.park(pitch);
        Ok(())
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Sit motionless on the pitch center
    pub fn park(&mut self, pitch: &Pitch) {
        self.pos = pitch.center();
        self.vel = Vec2::ZERO;
    }

    /// Reset to the pitch center and launch within ±`launch_half_angle` of horizontal
    pub fn fire_from_center(&mut self, pitch: &Pitch, config: &Config, rng: &mut GameRng) {
        let towards = match self.serve_towards {
            Some(side) => side,
            None => rng.0.gen(),
        };
        let half = config.launch_half_angle;
        let angle: f32 = if half > 0.0 {
            rng.0.gen_range(-half..=half)
        } else {
            0.0
        };

        self.pos = pitch.center();
        self.vel = Vec2::new(towards.sign() * angle.cos(), angle.sin()) * config.ball_speed_initial;
        log::debug!("Ball served toward the {towards} goal at {:.1} rad", angle);
    }
}
