// src/services/game_service.rs - Game operations exposed by the HTTP server

use crate::game::game_state::{BoardSnapshot, GameState};
use crate::game::sub_board::BOARD_CELLS;
use crate::mcts::MctsEngine;
use crate::services::error::{ServiceError, ServiceResult};
use crate::services::session_manager::{SessionManager, SessionTable};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// RESPONSE TYPES
// ============================================================================

/// Board returned after every request touching a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    #[serde(flatten)]
    pub board: BoardSnapshot,
    pub history_length: usize,
}

fn board_view(table: &SessionTable, id: usize) -> ServiceResult<BoardView> {
    let session = table.get(id)?;
    Ok(BoardView {
        board: session.state.snapshot(),
        history_length: session.history.len(),
    })
}

// ============================================================================
// QUERY PARSING
// ============================================================================

/// Raw query parameters of a request.
pub type Params = HashMap<String, String>;

pub fn parse_game_id(params: &Params) -> ServiceResult<usize> {
    let raw = params
        .get("id")
        .ok_or_else(|| ServiceError::bad_request("Please provide the game ID"))?;
    let id: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ServiceError::bad_request("Game ID provided was not a number"))?;
    usize::try_from(id).map_err(|_| ServiceError::game_not_found(id))
}

pub fn parse_play_index(params: &Params) -> ServiceResult<usize> {
    let raw = params
        .get("index")
        .ok_or_else(|| ServiceError::bad_request("Please provide the index of the intended play."))?;
    let index: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ServiceError::bad_request("Index provided not number"))?;
    if index < 0 || index >= BOARD_CELLS as i64 {
        return Err(ServiceError::bad_request("Index provided was out of bounds"));
    }
    Ok(index as usize)
}

pub fn parse_history_step(params: &Params) -> ServiceResult<i64> {
    let raw = params
        .get("step")
        .ok_or_else(|| ServiceError::bad_request("Please provide the step of history to jump to."))?;
    raw.trim()
        .parse()
        .map_err(|_| ServiceError::bad_request("Step provided not number"))
}

// ============================================================================
// VALIDATION
// ============================================================================

pub fn validate_play(state: &GameState, index: usize) -> ServiceResult<()> {
    if let Some(winner) = state.winner().describe() {
        return Err(ServiceError::bad_request(format!(
            "Game has already been won by {}",
            winner
        )));
    }
    if state.is_redirect_phase() {
        if state.super_board().sub_board(index).is_full() {
            return Err(ServiceError::bad_request("Chosen sub-board is already full!"));
        }
    } else if !state.is_current_sub_board_cell_blank(index) {
        return Err(ServiceError::bad_request("Chosen cell has already been played in!"));
    }
    Ok(())
}

// ============================================================================
// SERVICE
// ============================================================================

#[derive(Clone)]
pub struct GameService {
    sessions: SessionManager,
    engine: MctsEngine,
    mcts_trials: usize,
    idle_timeout: Duration,
}

impl GameService {
    pub fn new(
        sessions: SessionManager,
        engine: MctsEngine,
        mcts_trials: usize,
        idle_timeout: Duration,
    ) -> Self {
        Self {
            sessions,
            engine,
            mcts_trials,
            idle_timeout,
        }
    }

    pub async fn create(&self) -> ServiceResult<usize> {
        let id = self.sessions.write(|table| table.create(Utc::now())).await?;
        log::info!("🎮 Game created with ID: {}", id);
        Ok(id)
    }

    pub async fn ping(&self, id: usize) -> ServiceResult<()> {
        self.sessions
            .write(|table| table.ping(id, Utc::now()))
            .await
    }

    pub async fn close(&self, id: usize) -> ServiceResult<()> {
        self.sessions.write(|table| table.close(id)).await?;
        log::info!("🛑 Game {} closed", id);
        Ok(())
    }

    pub async fn board(&self, id: usize) -> ServiceResult<BoardView> {
        self.sessions.read(|table| board_view(table, id)).await
    }

    /// Applies a human move after validating it against the current phase.
    pub async fn play(&self, id: usize, index: usize) -> ServiceResult<BoardView> {
        self.sessions
            .write(|table| {
                let session = table.get_mut(id)?;
                validate_play(&session.state, index)?;
                session.play(index);
                board_view(table, id)
            })
            .await
    }

    /// Lets the MCTS engine play one action for the side to move.
    ///
    /// The search runs on a blocking worker over a copy of the position; the action is
    /// applied only if the game did not change in the meantime.
    pub async fn play_ai(&self, id: usize) -> ServiceResult<BoardView> {
        let state = self
            .sessions
            .read(|table| table.get(id).map(|session| session.state.clone()))
            .await?;
        if state.is_decided() {
            return Err(ServiceError::bad_request("Game already Ended"));
        }

        let engine = self.engine.clone();
        let trials = self.mcts_trials;
        let searched = state.clone();
        let action = tokio::task::spawn_blocking(move || engine.choose_move(&searched, trials))
            .await
            .map_err(|e| {
                log::error!("❌ MCTS worker failed: {}", e);
                ServiceError::InsufficientResources("AI move could not be computed".to_string())
            })?
            .ok_or_else(|| {
                log::error!("❌ MCTS returned no action with {} trials", trials);
                ServiceError::InsufficientResources("AI move could not be computed".to_string())
            })?;

        log::info!("🤖 AI plays {} in game {}", action, id);

        self.sessions
            .write(|table| {
                let session = table.get_mut(id)?;
                if session.state != state {
                    return Err(ServiceError::bad_request(
                        "Game changed while the AI was thinking",
                    ));
                }
                session.play(action);
                board_view(table, id)
            })
            .await
    }

    /// Rewinds the game to `step` and discards the later history.
    pub async fn jump(&self, id: usize, step: i64) -> ServiceResult<BoardView> {
        self.sessions
            .write(|table| {
                let session = table.get_mut(id)?;
                let step = usize::try_from(step)
                    .ok()
                    .filter(|&s| s < session.history.len())
                    .ok_or_else(|| ServiceError::bad_request("History step out of range"))?;
                session.state = session
                    .history
                    .jump_to(step)
                    .map_err(|e| ServiceError::bad_request(e.to_string()))?;
                board_view(table, id)
            })
            .await
    }

    /// Closes games idle for longer than the configured timeout.
    pub async fn expire_stale(&self) -> Vec<usize> {
        let timeout = self.idle_timeout;
        self.sessions
            .write(|table| table.expire_stale(Utc::now(), timeout))
            .await
    }
}
