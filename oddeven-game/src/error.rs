use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OddEvenError>;

/// Which call rejected an out-of-range number. The two calls report
/// different messages and callers match on them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Commit,
    Play,
}

impl Move {
    fn out_of_range_message(self) -> &'static str {
        match self {
            Move::Commit => "Number choice must be between 1 and 10",
            Move::Play => "Choose a number between 1 and 10",
        }
    }
}

/// Rejection reasons of the game operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Choose 1 or 2")]
    InvalidChoice,

    #[error("{}", .0.out_of_range_message())]
    InvalidNumber(Move),

    #[error("first choose your option: 1 = even, 2 = odd!")]
    GameNotInitialized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidChoice,
    InvalidNumber,
    GameNotInitialized,
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::InvalidChoice => ErrorKind::InvalidChoice,
            GameError::InvalidNumber(_) => ErrorKind::InvalidNumber,
            GameError::GameNotInitialized => ErrorKind::GameNotInitialized,
        }
    }
}

#[derive(Error, Debug)]
pub enum OddEvenError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("No game deployed at {}", .path.display())]
    NotDeployed { path: PathBuf },

    #[error("A game is already deployed at {}", .path.display())]
    AlreadyDeployed { path: PathBuf },

    #[error("Invalid game state: {0}")]
    InvalidState(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OddEvenError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// The game rejection behind this error, if any
    pub fn as_game_error(&self) -> Option<&GameError> {
        match self {
            OddEvenError::Game(err) => Some(err),
            _ => None,
        }
    }
}
