use glam::Vec2;
use match_core::*;
use std::io;
use std::path::Path;

/// Serves assets from memory. Flags decide which loads fail.
#[derive(Clone, Copy)]
struct MemoryAssets {
    font: bool,
    music: bool,
    shader: bool,
}

impl MemoryAssets {
    fn all() -> Self {
        Self {
            font: true,
            music: true,
            shader: true,
        }
    }
}

fn missing(what: &str) -> AssetError {
    AssetError::Io(io::Error::new(io::ErrorKind::NotFound, what.to_string()))
}

impl AssetSource for MemoryAssets {
    fn load_font(&mut self, path: &Path) -> Result<Font, AssetError> {
        if self.font {
            Ok(Font::new(path, b"font".to_vec()))
        } else {
            Err(missing("font"))
        }
    }

    fn load_music(&mut self, path: &Path) -> Result<Music, AssetError> {
        if self.music {
            Ok(Music::new(path, b"ogg".to_vec()))
        } else {
            Err(missing("music"))
        }
    }

    fn load_shader(&mut self, path: &Path) -> Result<Shader, AssetError> {
        if self.shader {
            Ok(Shader {
                path: path.to_path_buf(),
                source: "void main() {}".to_string(),
            })
        } else {
            Err(missing("shader"))
        }
    }
}

const PITCH: Vec2 = Vec2::new(800.0, 600.0);
const FRAME: f32 = 1.0 / 60.0;

fn new_match(config: Config) -> Match {
    let mut game = Match::new(config, Box::new(MemoryAssets::all()));
    game.initialise(PITCH).unwrap();
    game
}

fn assert_paddles_in_bounds(game: &Match) {
    let pitch = game.pitch();
    for side in Side::ALL {
        let paddle = game.paddle(side).unwrap();
        let rect = paddle.rect();
        assert!(
            rect.min.y >= pitch.top() - 1e-3 && rect.max.y <= pitch.bottom() + 1e-3,
            "{side} paddle out of bounds: {rect:?}"
        );
    }
}

#[test]
fn test_paddles_stay_in_bounds_for_any_dt() {
    let mut game = new_match(Config::new());
    game.on_key_pressed(Key::W);

    for dt in [0.0, 0.001, FRAME, 0.5, 1.0, 10.0] {
        game.update(dt);
        assert_paddles_in_bounds(&game);
    }

    game.on_key_released(Key::W);
    game.on_key_pressed(Key::S);
    for _ in 0..600 {
        game.update(FRAME);
        assert_paddles_in_bounds(&game);
    }
}

#[test]
fn test_waiting_transitions_to_active_exactly_once() {
    let mut game = new_match(Config::new());
    assert_eq!(game.state(), MatchState::Waiting);

    let mut launches = 0;
    let mut elapsed = 0.0;
    while elapsed < 3.5 {
        let events = game.update(0.05);
        elapsed += 0.05;
        if events.launched {
            launches += 1;
            assert_eq!(game.state(), MatchState::Active);
            let ball = game.ball().unwrap();
            assert!(ball.speed() > 0.0, "Ball moves immediately after launch");
            // The ball left the center this very frame
            let launch_pos = ball.pos - ball.vel * 0.05;
            assert!(
                (launch_pos - game.pitch().center()).length() < 1e-2,
                "Launched from center, got {launch_pos}"
            );
        }
    }
    assert_eq!(launches, 1);
    assert!(elapsed >= 3.0);
}

#[test]
fn test_goal_scores_for_opposite_side_and_resets() {
    let mut game = new_match(Config::new());
    game.update(2.99);
    game.update(0.02);
    assert_eq!(game.state(), MatchState::Active);

    // Ball past the left goal edge, still heading out
    if let Some(mut ball) = game.ball_mut() {
        ball.pos = Vec2::new(-50.0, 300.0);
        ball.vel = Vec2::new(-400.0, 0.0);
    }
    let events = game.update(FRAME);

    assert_eq!(events.goal_conceded, Some(Side::Left));
    assert_eq!(game.score().get(Side::Right), 1);
    assert_eq!(game.score().get(Side::Left), 0);
    assert_eq!(game.state(), MatchState::Waiting);
    assert_eq!(game.elapsed(), 0.0);
    assert_eq!(game.ball().unwrap().pos, game.pitch().center());
}

#[test]
fn test_input_controller_moves_exactly_one_speed_unit() {
    let mut config = Config::new();
    config.paddle_speed = 100.0;
    let mut game = new_match(config);
    let start = game.paddle(Side::Left).unwrap().pos.y;

    game.on_key_pressed(Key::S);
    game.update(1.0);
    let moved = game.paddle(Side::Left).unwrap().pos.y;
    assert!((moved - (start + 100.0)).abs() < 1e-3);

    game.on_key_released(Key::S);
    game.update(1.0);
    assert_eq!(game.paddle(Side::Left).unwrap().pos.y, moved);
}

#[test]
fn test_ai_controller_follows_ball_without_overshoot() {
    let mut game = new_match(Config::new());
    game.update(2.99);
    game.update(0.02);

    // Park the ball high above the right paddle
    if let Some(mut ball) = game.ball_mut() {
        ball.pos = Vec2::new(400.0, 100.0);
        ball.vel = Vec2::ZERO;
    }
    assert_eq!(game.controller(Side::Right).name(), "ai");
    let before = game.paddle(Side::Right).unwrap().pos.y;

    let mut last = before;
    for _ in 0..200 {
        game.update(FRAME);
        let y = game.paddle(Side::Right).unwrap().pos.y;
        assert!(y <= last + 1e-4, "AI paddle only moves up toward the ball");
        assert!(y >= 100.0 - 1e-3, "AI paddle never passes the ball");
        last = y;
    }
    assert!(last < before);
    assert!((last - 100.0).abs() < 1e-2, "AI paddle settles on the ball, got {last}");
}

#[test]
fn test_ai_paddle_tracks_a_moving_ball() {
    let mut game = new_match(Config::new());
    game.update(2.99);
    game.update(0.02);

    for ball_y in [120.0, 140.0, 480.0, 470.0, 310.0, 90.0] {
        if let Some(mut ball) = game.ball_mut() {
            ball.pos = Vec2::new(400.0, ball_y);
            ball.vel = Vec2::ZERO;
        }
        let before = game.paddle(Side::Right).unwrap().pos.y;

        game.update(FRAME);

        let after = game.paddle(Side::Right).unwrap().pos.y;
        if ball_y < before {
            assert!(after < before && after >= ball_y, "{before} -> {after} for ball at {ball_y}");
        } else {
            assert!(after > before && after <= ball_y, "{before} -> {after} for ball at {ball_y}");
        }
    }
}

#[test]
fn test_held_key_survives_conceding() {
    let mut game = new_match(Config::new());
    game.on_key_pressed(Key::S);
    game.update(0.1);
    let y = game.paddle(Side::Left).unwrap().pos.y;

    game.score_goal(Side::Left);
    game.update(0.1);

    assert!(game.paddle(Side::Left).unwrap().pos.y > y, "Left paddle keeps moving down");
}

#[test]
fn test_initialise_twice_restarts_waiting() {
    let mut game = new_match(Config::new());
    game.update(3.01);
    assert_eq!(game.state(), MatchState::Active);

    assert!(game.initialise(PITCH).is_ok());
    assert!(game.initialise(PITCH).is_ok());

    assert_eq!(game.state(), MatchState::Waiting);
    assert_eq!(game.elapsed(), 0.0);
    assert_eq!(game.ball().unwrap().pos, game.pitch().center());
    assert_eq!(game.ball().unwrap().vel, Vec2::ZERO);
}

#[test]
fn test_failed_initialise_is_repeatable() {
    let mut game = Match::new(Config::new(), Box::new(MemoryAssets::all()));
    let first = game.initialise(Vec2::new(0.0, 600.0));
    let second = game.initialise(Vec2::new(0.0, 600.0));

    for result in [first, second] {
        assert!(matches!(
            result,
            Err(MatchError::SubsystemInit {
                subsystem: Subsystem::Pitch,
                ..
            })
        ));
    }
    assert!(!game.is_initialised());
}

#[test]
fn test_subsystem_failures_name_the_subsystem() {
    let mut config = Config::new();
    config.controllers = SideMap::new(
        ControllerKind::Input {
            up: Key::Up,
            down: Key::Up,
        },
        ControllerKind::Ai,
    );
    let mut game = Match::new(config, Box::new(MemoryAssets::all()));
    let err = game.initialise(PITCH).unwrap_err();
    assert!(matches!(
        err,
        MatchError::SubsystemInit {
            subsystem: Subsystem::Controller(Side::Left),
            ..
        }
    ));

    let mut config = Config::new();
    config.paddle_inset = -10.0;
    let mut game = Match::new(config, Box::new(MemoryAssets::all()));
    assert!(matches!(
        game.initialise(PITCH),
        Err(MatchError::SubsystemInit {
            subsystem: Subsystem::Paddle(Side::Left),
            source: InitError::PaddleOffPitch { .. },
        })
    ));

    let mut config = Config::new();
    config.ball_radius = 500.0;
    let mut game = Match::new(config, Box::new(MemoryAssets::all()));
    assert!(matches!(
        game.initialise(PITCH),
        Err(MatchError::SubsystemInit {
            subsystem: Subsystem::Ball,
            ..
        })
    ));
}

#[test]
fn test_missing_font_aborts_but_music_and_shader_do_not() {
    let assets = MemoryAssets {
        font: false,
        ..MemoryAssets::all()
    };
    let mut game = Match::new(Config::new(), Box::new(assets));
    assert!(matches!(
        game.initialise(PITCH),
        Err(MatchError::FatalAsset { .. })
    ));
    assert_eq!(game.update(5.0), Events::new(), "Match does not start");

    let assets = MemoryAssets {
        music: false,
        shader: false,
        ..MemoryAssets::all()
    };
    let mut game = Match::new(Config::new(), Box::new(assets));
    game.initialise(PITCH).unwrap();
    let loaded = game.assets().unwrap();
    assert!(loaded.music.is_none());
    assert!(loaded.shader.is_none());
    assert!(game.update(3.1).launched, "Match runs without music or shader");
}

#[test]
fn test_same_seed_same_match() {
    let run = || {
        let mut game = new_match(Config::new());
        let mut trace = Vec::new();
        for _ in 0..600 {
            game.update(FRAME);
            trace.push(game.ball().unwrap().pos);
        }
        (trace, *game.score())
    };
    assert_eq!(run(), run());
}

#[test]
fn test_ai_versus_ai_keeps_scoring() {
    let mut config = Config::new();
    config.controllers = SideMap::new(ControllerKind::Ai, ControllerKind::Ai);
    config.ai_speed = 120.0; // too slow to return everything
    let mut game = new_match(config);

    let mut goals = 0;
    for _ in 0..(60 * 120) {
        if game.update(FRAME).goal_conceded.is_some() {
            goals += 1;
            assert_eq!(game.state(), MatchState::Waiting);
        }
        assert_paddles_in_bounds(&game);
    }
    let total: u32 = game.score().iter().map(|(_, points)| points).sum();
    assert_eq!(total, goals);
    assert!(goals > 0, "Slow paddles should concede within two minutes");
}

#[test]
fn test_end_to_end_right_goal() {
    let mut game = new_match(Config::new());

    let mut t = 0.0;
    while t < 3.1 {
        game.update(0.1);
        t += 0.1;
    }
    assert_eq!(game.state(), MatchState::Active);

    if let Some(mut ball) = game.ball_mut() {
        ball.pos = Vec2::new(PITCH.x + 100.0, 300.0);
    }
    game.score_goal(Side::Right);

    assert_eq!(game.score().get(Side::Left), 1);
    assert_eq!(game.score().get(Side::Right), 0);
    assert_eq!(game.state(), MatchState::Waiting);
}
