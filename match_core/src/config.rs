use std::path::PathBuf;

use serde::Deserialize;

use crate::controller::ControllerKind;
use crate::draw::Theme;
use crate::params::Params;
use crate::pitch::Pitch;
use crate::side::{Side, SideMap};

/// Asset locations, joined onto `root` at load time
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub root: PathBuf,
    pub font: PathBuf,
    pub music: PathBuf,
    pub shader: PathBuf,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("assets"),
            font: PathBuf::from("Lavigne.ttf"),
            music: PathBuf::from("synthwave80s.ogg"),
            shader: PathBuf::from("wobble.frag"),
        }
    }
}

impl AssetConfig {
    pub fn font_path(&self) -> PathBuf {
        self.root.join(&self.font)
    }

    pub fn music_path(&self) -> PathBuf {
        self.root.join(&self.music)
    }

    pub fn shader_path(&self) -> PathBuf {
        self.root.join(&self.shader)
    }
}

/// Match configuration. Any field missing from a deserialized source falls back to [`Params`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub paddle_speed: f32,
    pub ai_speed: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_max: f32,
    pub ball_speed_increase: f32,
    pub launch_half_angle: f32,
    pub wait_delay: f32,
    pub seed: u64,
    pub controllers: SideMap<ControllerKind>,
    pub assets: AssetConfig,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            paddle_speed: Params::PADDLE_SPEED,
            ai_speed: Params::AI_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            launch_half_angle: Params::LAUNCH_HALF_ANGLE,
            wait_delay: Params::WAIT_DELAY,
            seed: Params::RNG_SEED,
            controllers: SideMap::from_fn(ControllerKind::default_for),
            assets: AssetConfig::default(),
            theme: Theme::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for the paddle guarding `side`'s goal
    pub fn paddle_x(&self, side: Side, pitch: &Pitch) -> f32 {
        pitch.goal_x(side) - side.sign() * self.paddle_inset
    }
}
