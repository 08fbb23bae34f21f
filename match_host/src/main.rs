use std::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use fern::FormatCallback;
use glam::Vec2;
use match_core::{Config, ControllerKind, DrawList, FsAssets, Key, Match, Side};
use time::format_description::well_known::Iso8601;

/// Fixed simulation step
const FRAME_DT: f32 = 1.0 / 60.0;

/// How long the left player holds "up" at the start of the run
const HOLD_UP_SECONDS: f32 = 1.0;

#[derive(Parser)]
#[command(about, long_about = None)]
struct Cli {
    /// Pitch width in pixels.
    #[arg(long, default_value_t = 800.0)]
    width: f32,

    /// Pitch height in pixels.
    #[arg(long, default_value_t = 600.0)]
    height: f32,

    /// Simulated seconds to run before printing the final score.
    #[arg(long, default_value_t = 30.0)]
    seconds: f32,

    /// Seed for the serve randomness. Overrides the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with match settings. Missing fields keep their defaults.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Folder holding the font, music and shader.
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Who drives the left paddle.
    #[arg(value_enum, long)]
    left: Option<Driver>,

    /// Who drives the right paddle.
    #[arg(value_enum, long)]
    right: Option<Driver>,

    /// Most verbose level printed.
    #[arg(long, default_value = "info")]
    log_level: log::LevelFilter,

    /// Set where the printed logging is outputted.
    #[arg(value_enum, long, default_value_t)]
    console: ConsoleChannel,
}

#[derive(Copy, Clone, ValueEnum)]
enum Driver {
    /// Keyboard bindings
    Input,
    /// Ball-tracking computer player
    Ai,
}

impl Driver {
    fn kind(self, side: Side) -> ControllerKind {
        match (self, side) {
            (Driver::Ai, _) => ControllerKind::Ai,
            (Driver::Input, Side::Left) => ControllerKind::Input {
                up: Key::W,
                down: Key::S,
            },
            (Driver::Input, Side::Right) => ControllerKind::Input {
                up: Key::Up,
                down: Key::Down,
            },
        }
    }
}

#[derive(Copy, Clone, ValueEnum, Default)]
enum ConsoleChannel {
    /// Print to stdout
    #[default]
    Out,
    /// Print to stderr
    Err,
}

/// Run a headless match for a fixed amount of simulated time. All errors are logged, the [`Result`] returned is only
/// given for command-line environments.
fn main() -> Result<(), ()> {
    let cli = Cli::parse();
    setup_logger(cli.log_level, cli.console)
        .map_err(|e| eprintln!("Error while configuring logging : {e:?}"))?;

    let config = build_config(&cli)
        .map_err(|e| log::error!("Error while reading the match configuration : {e}."))?;
    let up_key = match config.controllers[Side::Left] {
        ControllerKind::Input { up, .. } => Some(up),
        ControllerKind::Ai => None,
    };

    let mut game = Match::new(config, Box::new(FsAssets));
    game.initialise(Vec2::new(cli.width, cli.height))
        .map_err(|e| log::error!("Could not start the match : {e}."))?;

    if let Some(key) = up_key {
        game.on_key_pressed(key);
    }
    let mut canvas = DrawList::new(Vec2::new(cli.width, cli.height));
    let frames = (cli.seconds.max(0.0) / FRAME_DT).round() as u64;
    let release_at = (HOLD_UP_SECONDS / FRAME_DT).round() as u64;

    for frame in 0..frames {
        if frame == release_at {
            if let Some(key) = up_key {
                game.on_key_released(key);
            }
        }

        let events = game.update(FRAME_DT);
        if let Some(side) = events.goal_conceded {
            log::info!(
                "{:.2}s: the ball went out on the {side} side.",
                (frame + 1) as f32 * FRAME_DT
            );
        }

        canvas.clear();
        game.draw(&mut canvas);
    }

    let score = game.score();
    log::info!(
        "Final score after {:.1}s: left {} - {} right.",
        cli.seconds,
        score.get(Side::Left),
        score.get(Side::Right)
    );
    log::debug!("Last frame issued {} draw commands.", canvas.commands.len());
    Ok(())
}

/// Defaults, then the config file, then command-line overrides.
fn build_config(cli: &Cli) -> Result<Config, Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => Config::new(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(root) = &cli.assets {
        config.assets.root = root.clone();
    }
    for (side, driver) in [(Side::Left, cli.left), (Side::Right, cli.right)] {
        if let Some(driver) = driver {
            config.controllers[side] = driver.kind(side);
        }
    }
    Ok(config)
}

fn read_config(path: &Path) -> Result<Config, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let config = serde_json::from_str(&text)?;
    log::debug!("Loaded match configuration from {}.", path.display());
    Ok(config)
}

/// Set up the global logger to log to stdout or stderr.
fn setup_logger(level: log::LevelFilter, console_channel: ConsoleChannel) -> Result<(), log::SetLoggerError> {
    let console_config = fern::Dispatch::new().level(level).format(format_log);
    let console_config = match console_channel {
        ConsoleChannel::Out => console_config.chain(io::stdout()),
        ConsoleChannel::Err => console_config.chain(io::stderr()),
    };
    fern::Dispatch::new().chain(console_config).apply()?;
    Ok(())
}

/// The function given to the logging crate [`fern`] to format messages.
fn format_log(out: FormatCallback, message: &std::fmt::Arguments, record: &log::Record) {
    out.finish(format_args!(
        "[{} {} {}] {}",
        utc_now_wrapper(),
        record.level(),
        &record
            .target()
            .chars()
            .take_while(|&c| c != ':')
            .collect::<String>(),
        message
    ))
}

/// Create a [`String`] of the current time in the UTC timezone, with a default in case of error.
fn utc_now_wrapper() -> String {
    time::OffsetDateTime::now_utc()
        .format(&Iso8601::DATE_TIME)
        .unwrap_or(String::from("invalid date"))
}
