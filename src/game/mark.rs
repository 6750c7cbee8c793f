use serde::{Deserialize, Serialize};
use std::fmt;

/// Content of a single cell. Serialized as the signed value used by line sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Mark {
    #[default]
    Blank,
    X,
    O,
}

impl Mark {
    /// Player who moves first.
    pub const STARTING_PLAYER: Mark = Mark::X;

    /// Signed weight used by the win patterns: X = +1, O = -1, Blank = 0.
    pub fn value(self) -> i8 {
        match self {
            Mark::Blank => 0,
            Mark::X => 1,
            Mark::O => -1,
        }
    }

    pub fn is_blank(self) -> bool {
        self == Mark::Blank
    }

    /// The other player. Blank has no opponent.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Blank => Mark::Blank,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
            Mark::Blank => "",
        }
    }
}

impl From<Mark> for i8 {
    fn from(mark: Mark) -> Self {
        mark.value()
    }
}

impl TryFrom<i8> for Mark {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Mark::Blank),
            1 => Ok(Mark::X),
            -1 => Ok(Mark::O),
            other => Err(format!("invalid cell value {}", other)),
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Blank => write!(f, "_"),
            other => write!(f, "{}", other.symbol()),
        }
    }
}

/// Result of a sub-board or of the whole game.
///
/// Shares the numeric space of [`Mark`] (`0`, `1`, `-1`) and adds `Tie` as `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Outcome {
    #[default]
    Undecided,
    Win(Mark),
    Tie,
}

impl Outcome {
    pub const TIE_VALUE: i8 = 2;

    pub fn is_decided(self) -> bool {
        self != Outcome::Undecided
    }

    /// Mark of the winner, or `Blank` for an undecided or tied result.
    pub fn winner(self) -> Mark {
        match self {
            Outcome::Win(mark) => mark,
            Outcome::Undecided | Outcome::Tie => Mark::Blank,
        }
    }

    /// Human readable description used in error messages.
    pub fn describe(self) -> Option<String> {
        match self {
            Outcome::Undecided => None,
            Outcome::Win(mark) => Some(format!("Player {}", mark.symbol())),
            Outcome::Tie => Some("Tie".to_string()),
        }
    }
}

impl From<Mark> for Outcome {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Blank => Outcome::Undecided,
            mark => Outcome::Win(mark),
        }
    }
}

impl From<Outcome> for i8 {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Undecided => 0,
            Outcome::Win(mark) => mark.value(),
            Outcome::Tie => Outcome::TIE_VALUE,
        }
    }
}

impl TryFrom<i8> for Outcome {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        if value == Outcome::TIE_VALUE {
            return Ok(Outcome::Tie);
        }
        Mark::try_from(value)
            .map(Outcome::from)
            .map_err(|_| format!("invalid result value {}", value))
    }
}
