//! The move authority: owns canonical board state and arbitrates legality.
//!
//! Serves the three operations the client consumes, each returning the full
//! grid as JSON: `GET /newgame`, `GET /play?x=&y=`, `GET /undo`. Rejections
//! come back as 409 with an `{"error": "..."}` body.

use crate::authority::GridResponse;
use crate::game::{Cell, Mark, Token, evaluate};
use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tracing::{info, instrument, warn};

/// Canonical game state. One game at a time; `new-game` replaces it.
#[derive(Debug)]
struct AuthorityState {
    tokens: [Token; 9],
    to_move: Mark,
    moves: Vec<usize>,
}

impl AuthorityState {
    fn new() -> Self {
        Self {
            tokens: [Token::Empty; 9],
            to_move: Mark::X,
            moves: Vec::new(),
        }
    }

    fn reset(&mut self) {
        *self = Self::new();
    }

    /// Builds the wire grid. Playable hints are derived from the evaluator:
    /// a cell is playable iff it is empty and the game is not over.
    fn grid(&self) -> GridResponse {
        let mut cells: Vec<Cell> = self
            .tokens
            .iter()
            .enumerate()
            .map(|(i, &text)| Cell {
                x: (i % 3) as u8,
                y: (i / 3) as u8,
                text,
                playable: false,
            })
            .collect();

        let over = evaluate(&cells).is_over();
        for cell in &mut cells {
            cell.playable = cell.text.is_empty() && !over;
        }

        GridResponse { cells }
    }

    fn is_over(&self) -> bool {
        evaluate(&self.grid().cells).is_over()
    }

    fn play(&mut self, x: u8, y: u8) -> Result<(), String> {
        if x >= 3 || y >= 3 {
            return Err(format!("cell ({}, {}) is off the board", x, y));
        }
        if self.is_over() {
            return Err("game is already over".to_string());
        }
        let index = y as usize * 3 + x as usize;
        if !self.tokens[index].is_empty() {
            return Err(format!("cell ({}, {}) is already occupied", x, y));
        }

        self.tokens[index] = self.to_move.into();
        self.moves.push(index);
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    fn undo(&mut self) -> Result<(), String> {
        let index = self
            .moves
            .pop()
            .ok_or_else(|| "nothing to undo".to_string())?;
        self.tokens[index] = Token::Empty;
        self.to_move = self.to_move.opponent();
        Ok(())
    }
}

type Shared = Arc<Mutex<AuthorityState>>;

/// Query parameters for `/play`.
#[derive(Debug, Deserialize)]
struct PlayParams {
    x: u8,
    y: u8,
}

/// Error body for rejected requests.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

type Rejection = (StatusCode, Json<ErrorBody>);

fn reject(error: String) -> Rejection {
    (StatusCode::CONFLICT, Json(ErrorBody { error }))
}

#[instrument(skip(state))]
async fn new_game(State(state): State<Shared>) -> Json<GridResponse> {
    let mut state = state.lock().unwrap();
    state.reset();
    info!("New game started");
    Json(state.grid())
}

#[instrument(skip(state), fields(x = params.x, y = params.y))]
async fn play(
    State(state): State<Shared>,
    Query(params): Query<PlayParams>,
) -> Result<Json<GridResponse>, Rejection> {
    let mut state = state.lock().unwrap();
    let mark = state.to_move;
    match state.play(params.x, params.y) {
        Ok(()) => {
            info!(mark = %mark, "Move applied");
            Ok(Json(state.grid()))
        }
        Err(error) => {
            warn!(error = %error, "Move rejected");
            Err(reject(error))
        }
    }
}

#[instrument(skip(state))]
async fn undo(State(state): State<Shared>) -> Result<Json<GridResponse>, Rejection> {
    let mut state = state.lock().unwrap();
    match state.undo() {
        Ok(()) => {
            info!(moves_left = state.moves.len(), "Move reverted");
            Ok(Json(state.grid()))
        }
        Err(error) => {
            warn!(error = %error, "Undo rejected");
            Err(reject(error))
        }
    }
}

/// Builds the authority router with a fresh game behind shared state.
pub fn router() -> Router {
    let shared: Shared = Arc::new(Mutex::new(AuthorityState::new()));
    Router::new()
        .route("/newgame", get(new_game))
        .route("/play", get(play))
        .route("/undo", get(undo))
        .with_state(shared)
}

/// Binds and serves the move authority.
pub async fn serve(host: &str, port: u16) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    info!(host, port, "Move authority listening");
    axum::serve(listener, router()).await?;
    Ok(())
}
