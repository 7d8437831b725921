//! Noughts, a tic-tac-toe client backed by a remote move authority.
//!
//! The authority owns canonical board state and arbitrates move legality;
//! the client tracks everything a player sees: turn order, win/draw
//! detection, the winning line, and an undo history.
//!
//! # Architecture
//!
//! - **Game core**: pure board evaluation and the undo history stack
//! - **Session**: the client-side state machine driving new-game/play/undo
//! - **Authority**: the remote contract, its HTTP client, and the bundled
//!   axum server implementing it
//! - **TUI**: thin ratatui presentation over the session

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod authority;
mod game;
mod rest_client;
mod server;
mod session;

// Binary-facing modules
pub mod cli;
pub mod tui;

// Crate-level exports - game core
pub use game::{Cell, History, LINES, Mark, Snapshot, Token, Verdict, Winner, evaluate};

// Crate-level exports - authority contract
pub use authority::{AuthorityError, GridResponse, MoveAuthority};
pub use rest_client::HttpAuthority;

// Crate-level exports - session orchestration
pub use session::Session;

// Crate-level exports - the bundled move authority
pub use server::{router, serve};
