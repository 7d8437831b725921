//! Client-side session orchestration over a move authority.
//!
//! The session holds the state the presentation layer renders: the current
//! grid, whose turn it is, the verdict, and the undo history. Every mutation
//! goes through the authority; the session applies the returned grid, flips
//! the mover, and re-evaluates. A failed operation leaves the session
//! exactly as it was: no history push, no player flip.

use crate::authority::{AuthorityError, GridResponse, MoveAuthority};
use crate::game::{Cell, History, Mark, Snapshot, Token, Verdict, Winner, evaluate};
use derive_getters::Getters;
use tracing::{debug, info, instrument};

/// A game session against a move authority.
#[derive(Debug, Getters)]
pub struct Session<A> {
    #[getter(skip)]
    authority: A,
    /// The nine cells last returned by the authority.
    cells: Vec<Cell>,
    /// Mark the next move will place.
    current_player: Mark,
    #[getter(skip)]
    verdict: Verdict,
    /// Snapshots of prior boards, newest last.
    history: History,
}

impl<A: MoveAuthority> Session<A> {
    /// Creates a session with an untouched board. Call [`Session::new_game`]
    /// to fetch the first grid from the authority.
    pub fn new(authority: A) -> Self {
        Self {
            authority,
            cells: empty_grid(),
            current_player: Mark::X,
            verdict: Verdict::Ongoing,
            history: History::new(),
        }
    }

    /// Starts a fresh game: new grid from the authority, empty history,
    /// X to move.
    #[instrument(skip(self))]
    pub async fn new_game(&mut self) -> Result<(), AuthorityError> {
        let grid = self.authority.new_game().await?;
        let cells = validated(grid)?;

        self.cells = cells;
        self.current_player = Mark::X;
        self.verdict = evaluate(&self.cells);
        self.history = History::new();

        info!("New game started");
        Ok(())
    }

    /// Plays the current player's mark at `(x, y)`.
    ///
    /// Silent no-op once the game is over; the presentation layer should not
    /// fire requests for terminal boards, but a stray call must not reach
    /// the authority. On success the pre-move board is snapshotted before
    /// the returned grid is applied.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub async fn play(&mut self, x: u8, y: u8) -> Result<(), AuthorityError> {
        if self.verdict.is_over() {
            debug!("Ignoring play on a finished game");
            return Ok(());
        }

        let grid = self.authority.play(x, y).await?;
        let cells = validated(grid)?;

        self.history.push(Snapshot {
            cells: self.cells.clone(),
            player: self.current_player,
        });
        self.cells = cells;
        self.current_player = self.current_player.opponent();
        self.verdict = evaluate(&self.cells);

        info!(x, y, status = ?self.verdict, "Move applied");
        Ok(())
    }

    /// Reverts the most recent move.
    ///
    /// No-op unless undo is currently available (history non-empty and the
    /// game still ongoing). The verdict is re-evaluated on the returned grid
    /// even though a consistent authority can never hand back a terminal
    /// board here.
    #[instrument(skip(self))]
    pub async fn undo(&mut self) -> Result<(), AuthorityError> {
        if !self.can_undo() {
            debug!("Ignoring undo with nothing to revert");
            return Ok(());
        }

        let grid = self.authority.undo().await?;
        let cells = validated(grid)?;

        self.history.pop();
        self.cells = cells;
        self.current_player = self.current_player.opponent();
        self.verdict = evaluate(&self.cells);

        info!(moves_left = self.history.len(), "Move reverted");
        Ok(())
    }

    /// The terminal outcome, if the game is over.
    pub fn winner(&self) -> Option<Winner> {
        self.verdict.winner()
    }

    /// Indices of the winning line when a mark has won; `None` for draws
    /// and ongoing games.
    pub fn winning_cells(&self) -> Option<[usize; 3]> {
        self.verdict.winning_line()
    }

    /// The current verdict.
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Whether the game has reached a terminal state.
    pub fn is_over(&self) -> bool {
        self.verdict.is_over()
    }

    /// Whether a move can currently be undone. Undo is never offered once
    /// the game is over.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty() && !self.verdict.is_over()
    }

    /// Whether the cell at `index` can be played right now: the authority
    /// marked it playable and the game is still ongoing.
    pub fn playable(&self, index: usize) -> bool {
        !self.is_over() && self.cells.get(index).is_some_and(|cell| cell.playable)
    }
}

/// Nine empty, unplayable cells; the board shown before the first
/// authority response arrives.
fn empty_grid() -> Vec<Cell> {
    (0..9)
        .map(|i| Cell {
            x: (i % 3) as u8,
            y: (i / 3) as u8,
            text: Token::Empty,
            playable: false,
        })
        .collect()
}

/// Checks an authority grid before it is applied: exactly nine cells whose
/// coordinates match their position. Mark values are already constrained by
/// deserialization.
fn validated(grid: GridResponse) -> Result<Vec<Cell>, AuthorityError> {
    let cells = grid.cells;
    if cells.len() != 9 {
        return Err(AuthorityError::InvalidResponse {
            message: format!("expected 9 cells, got {}", cells.len()),
        });
    }
    for (i, cell) in cells.iter().enumerate() {
        if cell.index() != i {
            return Err(AuthorityError::InvalidResponse {
                message: format!("cell {} reports coordinates ({}, {})", i, cell.x, cell.y),
            });
        }
    }
    Ok(cells)
}
