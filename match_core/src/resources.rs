use crate::side::{Side, SideMap};

/// Seconds elapsed in the current waiting or playing period, advanced only by frame updates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MatchClock {
    elapsed: f32,
}

impl MatchClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restart(&mut self) {
        self.elapsed = 0.0;
    }

    /// Negative and non-finite steps are ignored
    pub fn advance(&mut self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

/// Goals per side. Never reset during the life of a process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    points: SideMap<u32>,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> u32 {
        self.points[side]
    }

    pub fn increment(&mut self, side: Side) {
        self.points[side] = self.points[side].saturating_add(1);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Side, u32)> + '_ {
        self.points.iter().map(|(side, points)| (side, *points))
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(crate::params::Params::RNG_SEED)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub launched: bool,
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: Option<Side>,
    pub goal_conceded: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }
}
