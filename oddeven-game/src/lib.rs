//! Odd/Even Game Engine for 2 Players
//!
//! Player 1 commits to a parity (even or odd) and a number, Player 2 answers
//! with a number. The sum of both numbers decides the winner: Player 1 wins
//! when the parity of the sum matches the committed choice.
//!
//! The engine keeps exactly two records, the game in progress and the last
//! completed game. Persisting them between calls is the job of [`GameStore`].

pub mod engine;
pub mod error;
pub mod parity;
pub mod store;
pub mod types;

pub use engine::{GameEngine, GamePhase};
pub use error::{ErrorKind, GameError, Move, OddEvenError, Result};
pub use parity::{determine_winner, is_valid_number, Parity, Winner, MAX_NUMBER, MIN_NUMBER};
pub use store::{Deployment, GameStore, Snapshot};
pub use types::{GameRecord, RawGameRecord};
