// Modules for server components
pub mod http_api;

// Re-export public APIs
pub use http_api::{create_router, GameServer, ServerConfig};
