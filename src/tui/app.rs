//! Application state and logic.

use crate::game::Winner;
use crate::rest_client::HttpAuthority;
use crate::session::Session;
use tracing::{debug, info};

/// Main application state: the game session plus the status line.
pub struct App {
    session: Session<HttpAuthority>,
    status: String,
}

impl App {
    /// Creates a new application over the given authority.
    pub fn new(authority: HttpAuthority) -> Self {
        Self {
            session: Session::new(authority),
            status: "Connecting to the move authority...".to_string(),
        }
    }

    /// The underlying session.
    pub fn session(&self) -> &Session<HttpAuthority> {
        &self.session
    }

    /// The current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Starts a fresh game.
    pub async fn new_game(&mut self) {
        match self.session.new_game().await {
            Ok(()) => self.refresh_status(),
            Err(e) => self.status = format!("New game failed: {}", e),
        }
    }

    /// Plays the cell at `index` (0-8, row-major).
    pub async fn play(&mut self, index: usize) {
        // Non-playable cells never fire a request.
        if !self.session.playable(index) {
            debug!(index, "Ignoring key for non-playable cell");
            return;
        }

        let (x, y) = ((index % 3) as u8, (index / 3) as u8);
        match self.session.play(x, y).await {
            Ok(()) => self.refresh_status(),
            // Board is unchanged on failure; show the reason and let the
            // player retry.
            Err(e) => self.status = e.to_string(),
        }
    }

    /// Reverts the most recent move.
    pub async fn undo(&mut self) {
        if !self.session.can_undo() {
            self.status = "Nothing to undo".to_string();
            return;
        }
        match self.session.undo().await {
            Ok(()) => self.refresh_status(),
            Err(e) => self.status = e.to_string(),
        }
    }

    /// Dumps the undo history to the log, one board per snapshot.
    pub fn log_history(&self) {
        info!(moves = self.session.history().len(), "Game history");
        for (step, snapshot) in self.session.history().entries().iter().enumerate() {
            let board: String = snapshot
                .cells
                .chunks(3)
                .map(|row| {
                    row.iter()
                        .map(|cell| match cell.text.mark() {
                            Some(mark) => mark.to_string(),
                            None => "-".to_string(),
                        })
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("/");
            info!(step = step + 1, player = %snapshot.player, board = %board, "Snapshot");
        }
    }

    fn refresh_status(&mut self) {
        self.status = match self.session.winner() {
            Some(Winner::Draw) => "Game over: draw!".to_string(),
            Some(winner) => format!("Winner: {}!", winner),
            None => format!("Current player: {}", self.session.current_player()),
        };
    }
}
