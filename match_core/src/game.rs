//! The match: owns every entity, runs the waiting/active state machine and keeps score.

use glam::Vec2;
use hecs::{Entity, World};

use crate::assets::{AssetSource, LoadedAssets};
use crate::components::{Ball, Paddle};
use crate::config::Config;
use crate::controller::{ControlContext, Controller, Key};
use crate::draw::{DrawTarget, Drawable, TextStyle};
use crate::error::{MatchError, Subsystem};
use crate::pitch::Pitch;
use crate::resources::{Events, GameRng, MatchClock, Score};
use crate::side::{Side, SideMap};
use crate::systems::{update_ball, update_paddles};

/// Match states. There is no terminal state; every goal leads back to `Waiting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Ball parked at the pitch center while the launch delay runs
    Waiting,
    /// Ball in play
    Active,
}

pub struct Match {
    config: Config,
    world: World,
    pitch: Pitch,
    paddles: SideMap<Entity>,
    ball: Entity,
    controllers: SideMap<Box<dyn Controller>>,
    score: Score,
    state: MatchState,
    clock: MatchClock,
    rng: GameRng,
    asset_source: Box<dyn AssetSource>,
    assets: Option<LoadedAssets>,
    initialised: bool,
}

impl Match {
    /// Build a match whose controllers are picked from `config.controllers`
    pub fn new(config: Config, asset_source: Box<dyn AssetSource>) -> Self {
        Self::with_controllers(config, asset_source, |side, paddle, config| {
            config.controllers[side].build(paddle, config)
        })
    }

    /// Build a match with caller-supplied controllers. `make` receives the paddle each controller will drive.
    pub fn with_controllers(
        config: Config,
        asset_source: Box<dyn AssetSource>,
        mut make: impl FnMut(Side, Entity, &Config) -> Box<dyn Controller>,
    ) -> Self {
        let mut world = World::new();
        let paddles = SideMap::from_fn(|side| world.spawn((Paddle::new(side),)));
        let ball = world.spawn((Ball::new(Vec2::ZERO, Vec2::ZERO, config.ball_radius),));
        let controllers = SideMap::from_fn(|side| make(side, paddles[side], &config));
        let rng = GameRng::new(config.seed);

        Self {
            config,
            world,
            pitch: Pitch::new(),
            paddles,
            ball,
            controllers,
            score: Score::new(),
            state: MatchState::Waiting,
            clock: MatchClock::new(),
            rng,
            asset_source,
            assets: None,
            initialised: false,
        }
    }

    /// Set up pitch, paddles, controllers and ball in that order, then load assets.
    ///
    /// Stops at the first failure. Calling it again re-runs every step and restarts the waiting period.
    pub fn initialise(&mut self, pitch_size: Vec2) -> Result<(), MatchError> {
        self.initialised = false;
        self.try_initialise(pitch_size).map_err(|e| {
            log::error!("Match failed to initialise : {e}.");
            e
        })?;
        self.initialised = true;
        log::info!(
            "Match ready on a {}x{} pitch: {} vs {}.",
            self.pitch.width(),
            self.pitch.height(),
            self.controllers[Side::Left].name(),
            self.controllers[Side::Right].name()
        );
        Ok(())
    }

    fn try_initialise(&mut self, pitch_size: Vec2) -> Result<(), MatchError> {
        self.pitch
            .initialise(pitch_size)
            .map_err(MatchError::init(Subsystem::Pitch))?;

        for side in Side::ALL {
            if let Ok(mut paddle) = self.world.get::<&mut Paddle>(self.paddles[side]) {
                paddle
                    .initialise(side, &self.pitch, &self.config)
                    .map_err(MatchError::init(Subsystem::Paddle(side)))?;
            }
        }

        for (side, controller) in self.controllers.iter_mut() {
            controller
                .initialise()
                .map_err(MatchError::init(Subsystem::Controller(side)))?;
        }

        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.initialise(&self.pitch, &self.config)
                .map_err(MatchError::init(Subsystem::Ball))?;
        }

        self.state = MatchState::Waiting;
        self.clock.restart();

        let assets = LoadedAssets::load(self.asset_source.as_mut(), &self.config.assets)?;
        if let Some(music) = &assets.music {
            log::info!(
                "Music `{}` queued at volume {}{}.",
                music.path.display(),
                music.volume,
                if music.looping { ", looping" } else { "" }
            );
        }
        self.assets = Some(assets);
        Ok(())
    }

    /// Advance one frame: state machine, then paddles, controllers and finally the ball.
    ///
    /// Returns what happened during the frame. Does nothing until [`Match::initialise`] has succeeded.
    pub fn update(&mut self, dt: f32) -> Events {
        let mut events = Events::new();
        if !self.initialised {
            return events;
        }
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

        self.clock.advance(dt);
        match self.state {
            MatchState::Waiting => {
                if self.clock.elapsed() >= self.config.wait_delay {
                    self.launch();
                    events.launched = true;
                }
            }
            MatchState::Active => {}
        }

        update_paddles(&mut self.world, &self.pitch);

        for side in Side::ALL {
            let mut ctx = ControlContext {
                world: &mut self.world,
                pitch: &self.pitch,
                config: &self.config,
                ball: self.ball,
            };
            self.controllers[side].update(dt, &mut ctx);
        }

        if let Some(side) = update_ball(&mut self.world, &self.pitch, &self.config, dt, &mut events) {
            self.score_goal(side);
            events.goal_conceded = Some(side);
        }

        events
    }

    fn launch(&mut self) {
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.fire_from_center(&self.pitch, &self.config, &mut self.rng);
        }
        self.state = MatchState::Active;
        log::debug!("Waiting -> Active after {:.2}s.", self.clock.elapsed());
    }

    /// The ball left through `side`'s goal edge: the other side scores and the match waits for the next serve.
    ///
    /// The conceding side serves next and its controller is re-initialised.
    pub fn score_goal(&mut self, side: Side) {
        let scorer = !side;
        self.score.increment(scorer);
        self.state = MatchState::Waiting;
        self.clock.restart();

        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.park(&self.pitch);
            ball.serve_towards = Some(side);
        }

        let controller = &mut self.controllers[side];
        if let Err(e) = controller.initialise() {
            log::warn!("Could not reset the {side} {} controller : {e}.", controller.name());
        }

        log::info!(
            "Goal for {scorer}. Score is {} - {}.",
            self.score.get(Side::Left),
            self.score.get(Side::Right)
        );
    }

    /// Forward a key press to both controllers
    pub fn on_key_pressed(&mut self, key: Key) {
        for (_side, controller) in self.controllers.iter_mut() {
            controller.on_key_pressed(key);
        }
    }

    /// Forward a key release to both controllers
    pub fn on_key_released(&mut self, key: Key) {
        for (_side, controller) in self.controllers.iter_mut() {
            controller.on_key_released(key);
        }
    }

    /// Draw the pitch, both paddles, the ball and the two score labels
    pub fn draw(&self, target: &mut dyn DrawTarget) {
        let Some(assets) = self.assets.as_ref().filter(|_| self.initialised) else {
            return;
        };
        let theme = &self.config.theme;

        self.pitch.draw(target, theme);
        for side in Side::ALL {
            if let Some(paddle) = self.paddle(side) {
                paddle.draw(target, theme);
            }
        }
        if let Some(ball) = self.ball() {
            ball.draw(target, theme);
        }

        let center = target.size().x / 2.0;
        let style = TextStyle {
            font: &assets.font,
            size: theme.score_size,
            color: theme.score_color,
            bold: theme.score_bold,
        };
        let labels = [
            (Side::Left, theme.left_score_offset),
            (Side::Right, theme.right_score_offset),
        ];
        for (side, offset) in labels {
            let position = Vec2::new(center + offset, theme.score_top);
            target.draw_text(&self.score.get(side).to_string(), position, &style);
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn pitch(&self) -> &Pitch {
        &self.pitch
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_initialised(&self) -> bool {
        self.initialised
    }

    /// Seconds since the current waiting or playing period began
    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    pub fn assets(&self) -> Option<&LoadedAssets> {
        self.assets.as_ref()
    }

    pub fn controller(&self, side: Side) -> &dyn Controller {
        self.controllers[side].as_ref()
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world.get::<&Paddle>(self.paddles[side]).ok().map(|p| *p)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|b| *b)
    }

    /// Direct access to the ball, for hosts that script positions
    pub fn ball_mut(&mut self) -> Option<hecs::RefMut<'_, Ball>> {
        self.world.get::<&mut Ball>(self.ball).ok()
    }
}
