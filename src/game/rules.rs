//! Board evaluation: terminal-state detection and winning-line identification.

use super::types::{Cell, Mark};

/// The eight winning lines, in the order they are checked.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Outcome of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Moves remain and no line is complete.
    Ongoing,
    /// A line is complete.
    Won {
        /// The mark shared by the winning line.
        winner: Mark,
        /// Indices of the winning line.
        line: [usize; 3],
    },
    /// Every cell is occupied and no line is complete.
    Draw,
}

impl Verdict {
    /// Whether the game has reached a terminal state.
    pub fn is_over(self) -> bool {
        !matches!(self, Verdict::Ongoing)
    }

    /// The terminal outcome, if any.
    pub fn winner(self) -> Option<super::types::Winner> {
        match self {
            Verdict::Ongoing => None,
            Verdict::Won { winner, .. } => Some(super::types::Winner::Mark(winner)),
            Verdict::Draw => Some(super::types::Winner::Draw),
        }
    }

    /// Indices of the winning line, if a mark has won.
    pub fn winning_line(self) -> Option<[usize; 3]> {
        match self {
            Verdict::Won { line, .. } => Some(line),
            _ => None,
        }
    }
}

/// Evaluates a 9-cell board.
///
/// Lines are checked in the fixed [`LINES`] order and the first complete
/// line decides the verdict, so a board holding several complete lines
/// still evaluates deterministically. Pure and total over any well-formed
/// 9-cell slice; the caller guarantees the length.
pub fn evaluate(cells: &[Cell]) -> Verdict {
    debug_assert_eq!(cells.len(), 9);

    for line in &LINES {
        let [a, b, c] = *line;
        if let Some(winner) = cells[a].text.mark()
            && cells[b].text == cells[a].text
            && cells[c].text == cells[a].text
        {
            return Verdict::Won { winner, line: *line };
        }
    }

    if cells.iter().all(|cell| !cell.text.is_empty()) {
        Verdict::Draw
    } else {
        Verdict::Ongoing
    }
}
