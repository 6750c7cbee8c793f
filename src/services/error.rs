use thiserror::Error;

/// Failures reported to clients of the game service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InsufficientResources(String),
}

impl ServiceError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ServiceError::BadRequest(message.into())
    }

    pub fn game_not_found(id: i64) -> Self {
        ServiceError::NotFound(format!("Ongoing game with ID {} was not found.", id))
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
