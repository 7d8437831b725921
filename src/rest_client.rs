//! HTTP implementation of the move authority contract.

use crate::authority::{AuthorityError, GridResponse, MoveAuthority};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

/// Move authority reached over HTTP.
///
/// Speaks the authority's REST surface: `GET /newgame`, `GET /play?x=&y=`,
/// `GET /undo`, each returning a JSON `{"cells": [...]}` body.
#[derive(Debug, Clone)]
pub struct HttpAuthority {
    base_url: String,
    client: reqwest::Client,
}

impl HttpAuthority {
    /// Creates a client for the authority at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    #[instrument(skip(self))]
    async fn fetch_grid(&self, path: &str) -> Result<GridResponse, AuthorityError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Requesting grid from authority");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AuthorityError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        if status.is_client_error() {
            let body = response.text().await.unwrap_or_default();
            let message = rejection_message(&body)
                .unwrap_or_else(|| format!("HTTP {}", status));
            warn!(status = %status, message = %message, "Authority rejected request");
            return Err(AuthorityError::IllegalMove { message });
        }
        if !status.is_success() {
            warn!(status = %status, "Authority call failed");
            return Err(AuthorityError::Transport {
                message: format!("HTTP {}", status),
            });
        }

        let grid: GridResponse =
            response
                .json()
                .await
                .map_err(|e| AuthorityError::InvalidResponse {
                    message: e.to_string(),
                })?;

        debug!(cells = grid.cells.len(), "Received grid");
        Ok(grid)
    }
}

/// Pulls the authority's stated reason out of a `{"error": "..."}` body.
fn rejection_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("error")?
        .as_str()
        .map(str::to_string)
}

#[async_trait]
impl MoveAuthority for HttpAuthority {
    async fn new_game(&self) -> Result<GridResponse, AuthorityError> {
        self.fetch_grid("/newgame").await
    }

    async fn play(&self, x: u8, y: u8) -> Result<GridResponse, AuthorityError> {
        self.fetch_grid(&format!("/play?x={}&y={}", x, y)).await
    }

    async fn undo(&self) -> Result<GridResponse, AuthorityError> {
        self.fetch_grid("/undo").await
    }
}
