use std::fmt;

pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 10;

pub fn is_valid_number(number: u8) -> bool {
    (MIN_NUMBER..=MAX_NUMBER).contains(&number)
}

/// Parity guess of Player 1. Encoded as 1 = even, 2 = odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    Even = 1,
    Odd = 2,
}

impl Parity {
    pub fn of(value: u32) -> Self {
        if value % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

impl TryFrom<u8> for Parity {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Parity::Even),
            2 => Ok(Parity::Odd),
            other => Err(other),
        }
    }
}

impl From<Parity> for u8 {
    fn from(parity: Parity) -> u8 {
        parity as u8
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => write!(f, "even"),
            Parity::Odd => write!(f, "odd"),
        }
    }
}

/// Outcome of a completed game. Encoded as 1 = Player 1, 2 = Player 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    Player1 = 1,
    Player2 = 2,
}

impl TryFrom<u8> for Winner {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Winner::Player1),
            2 => Ok(Winner::Player2),
            other => Err(other),
        }
    }
}

impl From<Winner> for u8 {
    fn from(winner: Winner) -> u8 {
        winner as u8
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Player1 => write!(f, "Player 1"),
            Winner::Player2 => write!(f, "Player 2"),
        }
    }
}

/// Winner from Player 1's guess and both numbers.
/// Player 1 wins when the parity of the sum equals the guess.
pub fn determine_winner(choice: Parity, number_p1: u8, number_p2: u8) -> Winner {
    let sum = u32::from(number_p1) + u32::from(number_p2);

    if Parity::of(sum) == choice {
        Winner::Player1
    } else {
        Winner::Player2
    }
}
