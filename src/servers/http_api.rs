use crate::mcts::{MCTSHyperparameters, MctsEngine};
use crate::services::game_service::{
    parse_game_id, parse_history_step, parse_play_index, BoardView, GameService, Params,
};
use crate::services::janitor::spawn_janitor;
use crate::services::{ServiceError, SessionManager};
use crate::{Result, UltimateTttError};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{delete, get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

// Configuration du serveur de jeu
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Maximum number of concurrent games
    pub max_games: usize,
    /// MCTS iterations per AI move
    pub mcts_trials: usize,
    /// Games not pinged for this long are closed
    pub idle_timeout_secs: u64,
    pub hyperparameters: MCTSHyperparameters,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            max_games: 100,
            mcts_trials: 1000,
            idle_timeout_secs: 300,
            hyperparameters: MCTSHyperparameters::default(),
        }
    }
}

impl ServerConfig {
    pub fn build_service(&self) -> GameService {
        GameService::new(
            SessionManager::new(self.max_games),
            MctsEngine::new(self.hyperparameters.clone()),
            self.mcts_trials,
            chrono::Duration::seconds(self.idle_timeout_secs as i64),
        )
    }
}

pub struct GameServer {
    config: ServerConfig,
}

impl GameServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub async fn start(&self) -> Result<()> {
        let service = self.config.build_service();
        let app = create_router(service.clone());
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|e| UltimateTttError::Server(format!("invalid listen address: {}", e)))?;
        let listener = TcpListener::bind(addr).await?;

        let _janitor = spawn_janitor(
            service,
            std::time::Duration::from_secs(self.config.idle_timeout_secs.max(1)),
        );

        log::info!(
            "🌐 Game server starting on http://{} ({} games max, {} MCTS trials)",
            addr,
            self.config.max_games,
            self.config.mcts_trials
        );

        axum::serve(listener, app).await?;
        Ok(())
    }
}

pub fn create_router(service: GameService) -> Router {
    Router::new()
        .route("/game", get(get_game).delete(close_game))
        .route("/game/create", post(create_game))
        .route("/game/ping", get(ping_game))
        .route("/game/close", delete(close_game))
        .route("/game/play", post(play_game))
        .route("/game/play/ai", post(play_game_ai))
        .route("/game/jump", post(jump_to))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(service)
}

// ============================================================================
// ERROR MAPPING
// ============================================================================

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::InsufficientResources(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        log::warn!("⚠️ {} -> {}", status, self);
        (status, format!("Error: {}", self)).into_response()
    }
}

// ============================================================================
// HANDLERS
// ============================================================================

type ApiResult<T> = std::result::Result<T, ServiceError>;

async fn create_game(State(service): State<GameService>) -> ApiResult<String> {
    service.create().await.map(|id| id.to_string())
}

async fn ping_game(
    State(service): State<GameService>,
    Query(params): Query<Params>,
) -> ApiResult<&'static str> {
    let id = parse_game_id(&params)?;
    service.ping(id).await?;
    Ok("true")
}

async fn close_game(
    State(service): State<GameService>,
    Query(params): Query<Params>,
) -> ApiResult<&'static str> {
    let id = parse_game_id(&params)?;
    service.close(id).await?;
    Ok("true")
}

async fn get_game(
    State(service): State<GameService>,
    Query(params): Query<Params>,
) -> ApiResult<Json<BoardView>> {
    let id = parse_game_id(&params)?;
    service.board(id).await.map(Json)
}

async fn play_game(
    State(service): State<GameService>,
    Query(params): Query<Params>,
) -> ApiResult<Json<BoardView>> {
    let id = parse_game_id(&params)?;
    let index = parse_play_index(&params)?;
    service.play(id, index).await.map(Json)
}

async fn play_game_ai(
    State(service): State<GameService>,
    Query(params): Query<Params>,
) -> ApiResult<Json<BoardView>> {
    let id = parse_game_id(&params)?;
    service.play_ai(id).await.map(Json)
}

async fn jump_to(
    State(service): State<GameService>,
    Query(params): Query<Params>,
) -> ApiResult<Json<BoardView>> {
    let id = parse_game_id(&params)?;
    let step = parse_history_step(&params)?;
    service.jump(id, step).await.map(Json)
}
