use crate::parity::{Parity, Winner, MAX_NUMBER};
use serde::{Deserialize, Serialize};

/// One game record. Used both for the game in progress and for the last
/// completed game. Numbers use 0 for "not set".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "RawGameRecord", try_from = "RawGameRecord")]
pub struct GameRecord {
    pub choice_p1: Option<Parity>,
    pub number_p1: u8,
    pub number_p2: u8,
    pub last_winner: Option<Winner>,
}

impl GameRecord {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    /// Positional view: (choiceP1, numberP1, numberP2, lastWinner)
    pub fn to_tuple(&self) -> (u8, u8, u8, u8) {
        let raw = RawGameRecord::from(*self);
        (raw.choice_p1, raw.number_p1, raw.number_p2, raw.last_winner)
    }
}

/// Integer encoding of [`GameRecord`] as external callers read it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGameRecord {
    pub choice_p1: u8,
    pub number_p1: u8,
    pub number_p2: u8,
    pub last_winner: u8,
}

impl From<GameRecord> for RawGameRecord {
    fn from(record: GameRecord) -> Self {
        Self {
            choice_p1: record.choice_p1.map_or(0, u8::from),
            number_p1: record.number_p1,
            number_p2: record.number_p2,
            last_winner: record.last_winner.map_or(0, u8::from),
        }
    }
}

impl TryFrom<RawGameRecord> for GameRecord {
    type Error = String;

    fn try_from(raw: RawGameRecord) -> std::result::Result<Self, Self::Error> {
        let choice_p1 = match raw.choice_p1 {
            0 => None,
            tag => Some(
                Parity::try_from(tag).map_err(|tag| format!("invalid choiceP1 tag: {}", tag))?,
            ),
        };

        let last_winner = match raw.last_winner {
            0 => None,
            tag => Some(
                Winner::try_from(tag).map_err(|tag| format!("invalid lastWinner tag: {}", tag))?,
            ),
        };

        for (field, value) in [("numberP1", raw.number_p1), ("numberP2", raw.number_p2)] {
            if value > MAX_NUMBER {
                return Err(format!("{} out of range: {}", field, value));
            }
        }

        Ok(Self {
            choice_p1,
            number_p1: raw.number_p1,
            number_p2: raw.number_p2,
            last_winner,
        })
    }
}
