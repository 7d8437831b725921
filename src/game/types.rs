//! Core domain types for the board.

use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Content of a single cell, using the authority's wire values.
///
/// The wire format is the closed string set `""`, `"X"`, `"O"`; anything
/// else fails deserialization before it can reach the evaluator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// Unoccupied cell.
    #[default]
    #[serde(rename = "")]
    Empty,
    /// Cell holding an X.
    X,
    /// Cell holding an O.
    O,
}

impl Token {
    /// The mark occupying this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Token::Empty => None,
            Token::X => Some(Mark::X),
            Token::O => Some(Mark::O),
        }
    }

    /// Whether the cell is unoccupied.
    pub fn is_empty(self) -> bool {
        self == Token::Empty
    }
}

impl From<Mark> for Token {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Token::X,
            Mark::O => Token::O,
        }
    }
}

/// One of the nine board positions, as the authority reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Column, 0-based.
    pub x: u8,
    /// Row, 0-based.
    pub y: u8,
    /// Mark occupying the cell.
    pub text: Token,
    /// Authority-reported hint: empty and the game is not over.
    pub playable: bool,
}

impl Cell {
    /// Flat position index in row-major order.
    pub fn index(&self) -> usize {
        self.y as usize * 3 + self.x as usize
    }
}

/// Terminal verdict of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    /// The given mark completed a line.
    Mark(Mark),
    /// The board filled with no line complete.
    Draw,
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Mark(mark) => write!(f, "{}", mark),
            Winner::Draw => write!(f, "Draw"),
        }
    }
}
