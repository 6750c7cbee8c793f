//! # Ultimate Tic-Tac-Toe Library
//!
//! Rules engine, Monte Carlo Tree Search AI and HTTP game server for ultimate tic-tac-toe,
//! the variant played on a 3×3 grid of 3×3 sub-boards.
//!
//! ## Features
//!
//! - **Game Engine**: nested-board rules, forced/redirect moves, win and tie detection
//! - **AI Engine**: random-playout MCTS with UCB1 selection
//! - **Services**: in-memory session table with history replay and idle expiry
//! - **Server**: axum HTTP API (create/ping/close/play/play-ai/jump)
//!
//! ## Usage
//!
//! ```rust
//! use ultimate_tic_tac_toe::{game::GameState, mcts::MctsEngine};
//!
//! let mut state = GameState::new();
//! if let Some(action) = MctsEngine::default().choose_move(&state, 100) {
//!     state.apply(action);
//! }
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Core game logic and rules
pub mod game;

/// Monte Carlo Tree Search AI engine
pub mod mcts;

/// Session table and game operations
pub mod services;

/// HTTP server
pub mod servers;

/// Logger setup
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use game::{GameState, Mark, Outcome};
pub use mcts::{MCTSHyperparameters, MCTSResult, MctsEngine};
pub use servers::{GameServer, ServerConfig};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the library
#[derive(Debug, thiserror::Error)]
pub enum UltimateTttError {
    #[error("Game error: {0}")]
    Game(String),

    #[error("AI error: {0}")]
    Ai(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, UltimateTttError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
