// src/services/session_manager.rs - Table of concurrent games

use crate::game::game_state::GameState;
use crate::game::history::GameHistory;
use crate::services::error::{ServiceError, ServiceResult};
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone)]
pub struct GameSession {
    pub state: GameState,
    pub history: GameHistory,
    pub last_ping: DateTime<Utc>,
}

impl GameSession {
    pub fn new(now: DateTime<Utc>) -> Self {
        let state = GameState::new();
        let history = GameHistory::new(&state);
        Self {
            state,
            history,
            last_ping: now,
        }
    }

    /// Applies an action and records the resulting position.
    pub fn play(&mut self, action: usize) {
        self.state.apply(action);
        self.history.record(&self.state);
    }

    pub fn is_stale(&self, now: DateTime<Utc>, timeout: Duration) -> bool {
        now - self.last_ping > timeout
    }
}

/// Fixed-capacity table of games. Ids are slot indices; closed slots are reused
/// most recently closed first.
#[derive(Debug, Clone)]
pub struct SessionTable {
    sessions: Vec<Option<GameSession>>,
    closed_ids: Vec<usize>,
    max_games: usize,
}

impl SessionTable {
    pub fn new(max_games: usize) -> Self {
        Self {
            sessions: Vec::new(),
            closed_ids: Vec::new(),
            max_games,
        }
    }

    pub fn open_count(&self) -> usize {
        self.sessions.iter().filter(|s| s.is_some()).count()
    }

    pub fn create(&mut self, now: DateTime<Utc>) -> ServiceResult<usize> {
        if let Some(id) = self.closed_ids.pop() {
            self.sessions[id] = Some(GameSession::new(now));
            return Ok(id);
        }
        if self.sessions.len() >= self.max_games {
            return Err(ServiceError::InsufficientResources(
                "Max number of concurrent game has been hit. Try play again later.".to_string(),
            ));
        }
        self.sessions.push(Some(GameSession::new(now)));
        Ok(self.sessions.len() - 1)
    }

    pub fn get(&self, id: usize) -> ServiceResult<&GameSession> {
        self.sessions
            .get(id)
            .and_then(Option::as_ref)
            .ok_or_else(|| ServiceError::game_not_found(id as i64))
    }

    pub fn get_mut(&mut self, id: usize) -> ServiceResult<&mut GameSession> {
        self.sessions
            .get_mut(id)
            .and_then(Option::as_mut)
            .ok_or_else(|| ServiceError::game_not_found(id as i64))
    }

    pub fn ping(&mut self, id: usize, now: DateTime<Utc>) -> ServiceResult<()> {
        self.get_mut(id)?.last_ping = now;
        Ok(())
    }

    pub fn close(&mut self, id: usize) -> ServiceResult<()> {
        self.get(id)?;
        self.sessions[id] = None;
        self.closed_ids.push(id);
        Ok(())
    }

    /// Closes every game not pinged within `timeout`, returning their ids.
    pub fn expire_stale(&mut self, now: DateTime<Utc>, timeout: Duration) -> Vec<usize> {
        let stale: Vec<usize> = self
            .sessions
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| match slot {
                Some(session) if session.is_stale(now, timeout) => Some(id),
                _ => None,
            })
            .collect();

        for &id in &stale {
            log::info!("🧹 Stale game with ID {} found. Closing.", id);
            self.sessions[id] = None;
            self.closed_ids.push(id);
        }
        stale
    }
}

// ============================================================================
// SHARED HANDLE
// ============================================================================

#[derive(Clone)]
pub struct SessionManager {
    store: Arc<RwLock<SessionTable>>,
}

impl SessionManager {
    pub fn new(max_games: usize) -> Self {
        Self {
            store: Arc::new(RwLock::new(SessionTable::new(max_games))),
        }
    }

    /// Runs `f` on the table under the read lock.
    pub async fn read<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&SessionTable) -> T,
    {
        let table = self.store.read().await;
        f(&table)
    }

    /// Runs `f` on the table under the write lock.
    pub async fn write<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut SessionTable) -> T,
    {
        let mut table = self.store.write().await;
        f(&mut table)
    }
}
