//! The move authority contract.
//!
//! The authority is a remote service that owns canonical board state and
//! arbitrates move legality. The session trusts the grids it returns and
//! never re-validates legality locally.

use crate::game::Cell;
use async_trait::async_trait;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Grid returned by every authority operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridResponse {
    /// The nine cells of the board, in `y * 3 + x` order.
    pub cells: Vec<Cell>,
}

/// Failure of a single authority operation.
///
/// None of these are fatal: each is scoped to the one requested operation,
/// leaves session state untouched, and is surfaced for the user to retry.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum AuthorityError {
    /// The call failed outright (network, timeout, server fault).
    #[display("authority unreachable: {message}")]
    Transport {
        /// What went wrong.
        message: String,
    },
    /// The authority answered with a grid this client cannot accept.
    /// Treated like a transport failure; the grid is never evaluated.
    #[display("malformed authority response: {message}")]
    InvalidResponse {
        /// What was malformed.
        message: String,
    },
    /// The authority rejected the move as illegal.
    #[display("move rejected: {message}")]
    IllegalMove {
        /// The authority's stated reason.
        message: String,
    },
}

/// Remote service owning canonical board state.
///
/// Each operation resolves with the full grid after the request was applied,
/// or fails without observable effect on the caller.
#[async_trait]
pub trait MoveAuthority {
    /// Starts a fresh game: all cells empty, X to move.
    async fn new_game(&self) -> Result<GridResponse, AuthorityError>;

    /// Applies the current player's mark at `(x, y)`.
    async fn play(&self, x: u8, y: u8) -> Result<GridResponse, AuthorityError>;

    /// Reverts the most recent move.
    async fn undo(&self) -> Result<GridResponse, AuthorityError>;
}
