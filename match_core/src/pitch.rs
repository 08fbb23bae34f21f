use glam::Vec2;

use crate::error::InitError;
use crate::side::Side;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// The playfield. Set once by [`Pitch::initialise`] and only read afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pitch {
    bounds: Aabb,
}

impl Default for Pitch {
    fn default() -> Self {
        Self {
            bounds: Aabb::new(Vec2::ZERO, Vec2::ZERO),
        }
    }
}

impl Pitch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size the pitch, anchored at the origin.
    pub fn initialise(&mut self, size: Vec2) -> Result<(), InitError> {
        if !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
            return Err(InitError::InvalidPitchSize {
                width: size.x,
                height: size.y,
            });
        }
        self.bounds = Aabb::new(Vec2::ZERO, size);
        Ok(())
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    pub fn width(&self) -> f32 {
        self.bounds.size().x
    }

    pub fn height(&self) -> f32 {
        self.bounds.size().y
    }

    pub fn center(&self) -> Vec2 {
        self.bounds.center()
    }

    pub fn top(&self) -> f32 {
        self.bounds.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.bounds.max.y
    }

    /// X coordinate of the goal edge belonging to `side`
    pub fn goal_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.bounds.min.x,
            Side::Right => self.bounds.max.x,
        }
    }

    /// Clamp a Y coordinate so an object extending `half_extent` above and below stays inside
    pub fn clamp_y(&self, y: f32, half_extent: f32) -> f32 {
        let lo = self.top() + half_extent;
        let hi = self.bottom() - half_extent;
        if lo > hi {
            return self.center().y;
        }
        y.clamp(lo, hi)
    }

    /// Which goal edge, if any, a circle has completely crossed
    pub fn goal_crossed(&self, center: Vec2, radius: f32) -> Option<Side> {
        if center.x + radius < self.goal_x(Side::Left) {
            Some(Side::Left)
        } else if center.x - radius > self.goal_x(Side::Right) {
            Some(Side::Right)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pitch() -> Pitch {
        let mut pitch = Pitch::new();
        pitch.initialise(Vec2::new(800.0, 600.0)).unwrap();
        pitch
    }

    #[test]
    fn test_pitch_rejects_degenerate_sizes() {
        let mut pitch = Pitch::new();
        assert!(pitch.initialise(Vec2::new(0.0, 600.0)).is_err());
        assert!(pitch.initialise(Vec2::new(800.0, -1.0)).is_err());
        assert!(pitch.initialise(Vec2::new(f32::NAN, 600.0)).is_err());
        assert!(pitch.initialise(Vec2::new(f32::INFINITY, 600.0)).is_err());
        assert_eq!(pitch, Pitch::default(), "Failed initialise leaves pitch untouched");
    }

    #[test]
    fn test_pitch_center_and_edges() {
        let pitch = pitch();
        assert_eq!(pitch.center(), Vec2::new(400.0, 300.0));
        assert_eq!(pitch.goal_x(Side::Left), 0.0);
        assert_eq!(pitch.goal_x(Side::Right), 800.0);
        assert_eq!(pitch.width(), 800.0);
        assert_eq!(pitch.height(), 600.0);
    }

    #[test]
    fn test_pitch_clamp_y() {
        let pitch = pitch();
        assert_eq!(pitch.clamp_y(-20.0, 50.0), 50.0);
        assert_eq!(pitch.clamp_y(1000.0, 50.0), 550.0);
        assert_eq!(pitch.clamp_y(300.0, 50.0), 300.0);
    }

    #[test]
    fn test_goal_requires_ball_fully_past_edge() {
        let pitch = pitch();
        assert_eq!(pitch.goal_crossed(Vec2::new(-5.0, 300.0), 10.0), None);
        assert_eq!(
            pitch.goal_crossed(Vec2::new(-10.5, 300.0), 10.0),
            Some(Side::Left)
        );
        assert_eq!(
            pitch.goal_crossed(Vec2::new(811.0, 300.0), 10.0),
            Some(Side::Right)
        );
        assert_eq!(pitch.goal_crossed(Vec2::new(400.0, 300.0), 10.0), None);
    }

    #[test]
    fn test_aabb_contains() {
        let aabb = Aabb::from_center_size(Vec2::new(10.0, 10.0), Vec2::new(4.0, 2.0));
        assert!(aabb.contains(Vec2::new(12.0, 11.0)));
        assert!(!aabb.contains(Vec2::new(12.1, 10.0)));
    }
}
