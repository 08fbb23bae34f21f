//! Failure types. Every failure surfaces during initialisation; steady-state update and draw cannot fail.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::side::Side;

/// The part of a match that refused to initialise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subsystem {
    Pitch,
    Paddle(Side),
    Controller(Side),
    Ball,
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pitch => f.write_str("pitch"),
            Self::Paddle(side) => write!(f, "{side} paddle"),
            Self::Controller(side) => write!(f, "{side} controller"),
            Self::Ball => f.write_str("ball"),
        }
    }
}

/// Reason a single subsystem failed to initialise.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InitError {
    #[error("pitch size must be finite and positive - got {width}x{height}")]
    InvalidPitchSize { width: f32, height: f32 },
    #[error("paddle of height {paddle} does not fit a pitch of height {pitch}")]
    PaddleTooTall { paddle: f32, pitch: f32 },
    #[error("paddle inset {inset} does not keep the paddle on a pitch of width {width}")]
    PaddleOffPitch { inset: f32, width: f32 },
    #[error("ball of radius {radius} does not fit a pitch of size {width}x{height}")]
    BallTooLarge { radius: f32, width: f32, height: f32 },
    #[error("`{name}` must be finite and positive - got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("up and down are both bound to {0:?}")]
    ConflictingBindings(crate::controller::Key),
}

/// Failure to load one asset file.
#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("asset `{}` is empty", .0.display())]
    Empty(PathBuf),
}

/// Failure returned by [`crate::Match::initialise`]. Startup is aborted; nothing is retried.
#[derive(thiserror::Error, Debug)]
pub enum MatchError {
    #[error("failed to initialise the {subsystem}: {source}")]
    SubsystemInit {
        subsystem: Subsystem,
        #[source]
        source: InitError,
    },
    #[error("unable to load font `{}`: {source}", path.display())]
    FatalAsset {
        path: PathBuf,
        #[source]
        source: AssetError,
    },
}

impl MatchError {
    pub(crate) fn init(subsystem: Subsystem) -> impl FnOnce(InitError) -> MatchError {
        move |source| MatchError::SubsystemInit { subsystem, source }
    }
}
