use crate::error::{GameError, Move, OddEvenError, Result};
use crate::parity::{determine_winner, is_valid_number, Parity, Winner};
use crate::types::GameRecord;

/// Phase of the game in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Idle,
    AwaitingPlayer2,
}

/// The odd/even game state machine.
///
/// Every operation either applies all of its effects or returns an error
/// and leaves both records untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameEngine {
    current: GameRecord,
    last: GameRecord,
}

impl GameEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild an engine from stored records.
    ///
    /// `current` must be empty or a pending commitment, and `last` must be
    /// empty or a game resolved by the parity rule.
    pub fn from_records(current: GameRecord, last: GameRecord) -> Result<Self> {
        match current.choice_p1 {
            None if !current.is_empty() => {
                return Err(OddEvenError::invalid_state(
                    "current game has numbers but no choice",
                ));
            }
            Some(_) if !is_valid_number(current.number_p1) => {
                return Err(OddEvenError::invalid_state(format!(
                    "current numberP1 {} out of range",
                    current.number_p1
                )));
            }
            Some(_) if current.number_p2 != 0 || current.last_winner.is_some() => {
                return Err(OddEvenError::invalid_state(
                    "current game is already played",
                ));
            }
            _ => {}
        }

        if !last.is_empty() {
            let (Some(choice), Some(winner)) = (last.choice_p1, last.last_winner) else {
                return Err(OddEvenError::invalid_state("last game is not completed"));
            };

            if !is_valid_number(last.number_p1) || !is_valid_number(last.number_p2) {
                return Err(OddEvenError::invalid_state(format!(
                    "last game numbers {} and {} out of range",
                    last.number_p1, last.number_p2
                )));
            }

            if determine_winner(choice, last.number_p1, last.number_p2) != winner {
                return Err(OddEvenError::invalid_state(format!(
                    "last game winner {} does not match its numbers",
                    winner
                )));
            }
        }

        Ok(Self { current, last })
    }

    pub fn phase(&self) -> GamePhase {
        match self.current.choice_p1 {
            None => GamePhase::Idle,
            Some(_) => GamePhase::AwaitingPlayer2,
        }
    }

    pub fn is_awaiting_player2(&self) -> bool {
        self.phase() == GamePhase::AwaitingPlayer2
    }

    /// Current game record, possibly empty or partial
    pub fn game_data(&self) -> GameRecord {
        self.current
    }

    /// Most recently completed game, all zeros if none completed yet
    pub fn last_game_data(&self) -> GameRecord {
        self.last
    }

    /// Player 1 commits to a parity (1 = even, 2 = odd) and a number.
    ///
    /// A commitment still waiting for Player 2 is replaced.
    pub fn init_game(&mut self, choice: u8, number: u8) -> std::result::Result<(), GameError> {
        let Ok(choice) = Parity::try_from(choice) else {
            tracing::debug!("init_game rejected: choice {} is not 1 or 2", choice);
            return Err(GameError::InvalidChoice);
        };

        if !is_valid_number(number) {
            tracing::debug!("init_game rejected: number {} out of range", number);
            return Err(GameError::InvalidNumber(Move::Commit));
        }

        if let Some(pending) = self.current.choice_p1 {
            tracing::warn!(
                "Replacing pending commitment ({}, {}) with ({}, {})",
                pending,
                self.current.number_p1,
                choice,
                number
            );
        }

        self.current.choice_p1 = Some(choice);
        self.current.number_p1 = number;

        tracing::info!("Player 1 committed to {} with number {}", choice, number);
        Ok(())
    }

    /// Player 2 answers with a number; resolves the game.
    ///
    /// On success the finished game becomes the last record and the current
    /// record is cleared for the next round.
    pub fn play_game(&mut self, number: u8) -> std::result::Result<Winner, GameError> {
        let Some(choice) = self.current.choice_p1 else {
            tracing::debug!("play_game rejected: no commitment from Player 1");
            return Err(GameError::GameNotInitialized);
        };

        if !is_valid_number(number) {
            tracing::debug!("play_game rejected: number {} out of range", number);
            return Err(GameError::InvalidNumber(Move::Play));
        }

        let winner = determine_winner(choice, self.current.number_p1, number);

        self.current.number_p2 = number;
        self.current.last_winner = Some(winner);
        self.last = self.current;
        self.current = GameRecord::empty();

        tracing::info!(
            "Game completed: {} + {} with Player 1 on {}. Winner: {}",
            self.last.number_p1,
            number,
            choice,
            winner
        );

        Ok(winner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_is_idle() {
        let engine = GameEngine::new();
        assert_eq!(engine.phase(), GamePhase::Idle);
        assert!(engine.game_data().is_empty());
        assert!(engine.last_game_data().is_empty());
    }

    #[test]
    fn test_init_moves_to_awaiting_player2() {
        let mut engine = GameEngine::new();
        engine.init_game(2, 5).unwrap();

        assert!(engine.is_awaiting_player2());
        assert_eq!(engine.game_data().to_tuple(), (2, 5, 0, 0));
        assert!(engine.last_game_data().is_empty());
    }

    #[test]
    fn test_choice_checked_before_number() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.init_game(0, 0), Err(GameError::InvalidChoice));
        assert_eq!(engine.init_game(3, 11), Err(GameError::InvalidChoice));
    }

    #[test]
    fn test_initialization_checked_before_number() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.play_game(0), Err(GameError::GameNotInitialized));
        assert_eq!(engine.play_game(11), Err(GameError::GameNotInitialized));
    }

    #[test]
    fn test_play_resolves_and_resets() {
        let mut engine = GameEngine::new();
        engine.init_game(1, 5).unwrap();

        let winner = engine.play_game(6).unwrap();

        assert_eq!(winner, Winner::Player2);
        assert_eq!(engine.phase(), GamePhase::Idle);
        assert!(engine.game_data().is_empty());
        assert_eq!(engine.last_game_data().to_tuple(), (1, 5, 6, 2));
    }

    #[test]
    fn test_failed_play_keeps_pending_commitment() {
        let mut engine = GameEngine::new();
        engine.init_game(1, 4).unwrap();
        let before = engine.clone();

        assert_eq!(engine.play_game(11), Err(GameError::InvalidNumber(Move::Play)));
        assert_eq!(engine, before);
    }

    fn record(choice: u8, n1: u8, n2: u8, winner: u8) -> GameRecord {
        GameRecord {
            choice_p1: Parity::try_from(choice).ok(),
            number_p1: n1,
            number_p2: n2,
            last_winner: Winner::try_from(winner).ok(),
        }
    }

    #[test]
    fn test_from_records_accepts_reachable_states() {
        let engine = GameEngine::from_records(record(2, 7, 0, 0), record(1, 5, 6, 2)).unwrap();
        assert_eq!(engine.phase(), GamePhase::AwaitingPlayer2);
        assert_eq!(engine.last_game_data().to_tuple(), (1, 5, 6, 2));

        let empty = GameEngine::from_records(GameRecord::empty(), GameRecord::empty()).unwrap();
        assert_eq!(empty, GameEngine::new());
    }

    #[test]
    fn test_from_records_rejects_broken_current() {
        for current in [
            record(1, 0, 0, 0),
            record(1, 0, 7, 2),
            record(2, 3, 4, 0),
            record(2, 3, 0, 1),
            record(0, 9, 0, 0),
            record(0, 0, 0, 1),
        ] {
            let err = GameEngine::from_records(current, GameRecord::empty()).unwrap_err();
            assert!(matches!(err, OddEvenError::InvalidState(_)), "{:?}", current);
        }
    }

    #[test]
    fn test_from_records_rejects_broken_last() {
        for last in [
            record(0, 9, 0, 1),
            record(1, 5, 6, 0),
            record(1, 0, 6, 2),
            record(1, 5, 0, 2),
            // 5 + 6 = 11 is odd, an even guess cannot win
            record(1, 5, 6, 1),
        ] {
            let err = GameEngine::from_records(GameRecord::empty(), last).unwrap_err();
            assert!(matches!(err, OddEvenError::InvalidState(_)), "{:?}", last);
        }
    }
}
