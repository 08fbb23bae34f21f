//! Read-only draw contract. Entities describe themselves to a [`DrawTarget`]; rasterizing is the host's job.

use std::path::PathBuf;

use glam::Vec2;
use serde::Deserialize;

use crate::assets::Font;
use crate::components::{Ball, Paddle};
use crate::pitch::{Aabb, Pitch};

/// RGBA colour, built from a `0xRRGGBBAA` literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "u32")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<u32> for Color {
    fn from(rgba: u32) -> Self {
        let [r, g, b, a] = rgba.to_be_bytes();
        Self { r, g, b, a }
    }
}

impl Color {
    pub const WHITE: Color = Color {
        r: 0xff,
        g: 0xff,
        b: 0xff,
        a: 0xff,
    };
}

/// Colours and score label layout supplied by the presentation layer
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub pitch_line: Color,
    pub paddle: Color,
    pub ball: Color,
    pub score_color: Color,
    pub score_size: u32,
    pub score_bold: bool,
    pub score_top: f32,
    pub left_score_offset: f32, // from horizontal center
    pub right_score_offset: f32,
    pub center_line_width: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            pitch_line: Color::from(0xffffff80),
            paddle: Color::WHITE,
            ball: Color::WHITE,
            score_color: Color::from(0xffffff50),
            score_size: 100,
            score_bold: true,
            score_top: 10.0,
            left_score_offset: -150.0,
            right_score_offset: 90.0,
            center_line_width: 4.0,
        }
    }
}

pub struct TextStyle<'a> {
    pub font: &'a Font,
    pub size: u32,
    pub color: Color,
    pub bold: bool,
}

/// Surface the match draws onto
pub trait DrawTarget {
    fn size(&self) -> Vec2;
    fn fill_rect(&mut self, rect: Aabb, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn draw_text(&mut self, text: &str, position: Vec2, style: &TextStyle<'_>);
}

pub trait Drawable {
    fn draw(&self, target: &mut dyn DrawTarget, theme: &Theme);
}

impl Drawable for Pitch {
    fn draw(&self, target: &mut dyn DrawTarget, theme: &Theme) {
        let size = Vec2::new(theme.center_line_width, self.height());
        target.fill_rect(Aabb::from_center_size(self.center(), size), theme.pitch_line);
    }
}

impl Drawable for Paddle {
    fn draw(&self, target: &mut dyn DrawTarget, theme: &Theme) {
        target.fill_rect(self.rect(), theme.paddle);
    }
}

impl Drawable for Ball {
    fn draw(&self, target: &mut dyn DrawTarget, theme: &Theme) {
        target.fill_circle(self.pos, self.radius, theme.ball);
    }
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        rect: Aabb,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Text {
        text: String,
        position: Vec2,
        size: u32,
        color: Color,
        bold: bool,
        font: PathBuf,
    },
}

/// [`DrawTarget`] that records every call, for headless hosts and tests
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    size: Vec2,
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Vec2)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, position, .. } => Some((text.as_str(), *position)),
            _ => None,
        })
    }
}

impl DrawTarget for DrawList {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn fill_rect(&mut self, rect: Aabb, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, position: Vec2, style: &TextStyle<'_>) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            size: style.size,
            color: style.color,
            bold: style.bold,
            font: style.font.path.clone(),
        });
    }
}
