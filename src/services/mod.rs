pub mod error;
pub mod game_service;
pub mod janitor;
pub mod session_manager;

pub use error::{ServiceError, ServiceResult};
pub use game_service::{BoardView, GameService};
pub use session_manager::{GameSession, SessionManager, SessionTable};
