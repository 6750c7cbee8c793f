use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use ultimate_tic_tac_toe::servers::{create_router, ServerConfig};
use ultimate_tic_tac_toe::GameState;

fn router(max_games: usize) -> Router {
    let config = ServerConfig {
        max_games,
        mcts_trials: 30,
        ..Default::default()
    };
    create_router(config.build_service())
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn json(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}

#[tokio::test]
async fn test_create_play_and_read_game() {
    let app = router(4);
    let (status, id) = send(&app, "POST", "/game/create").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(id, "0");

    let (status, body) = send(&app, "POST", "/game/play?id=0&index=4").await;
    assert_eq!(status, StatusCode::OK);
    let board = json(&body);
    assert_eq!(board["currentSubBoard"], 4);
    assert_eq!(board["currentPlayer"], -1);
    assert_eq!(board["winner"], 0);
    assert_eq!(board["historyLength"], 2);
    assert_eq!(board["subBoards"][4]["squares"][4], 1);

    let (status, body) = send(&app, "POST", "/game/play?id=0&index=4").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Error: Chosen cell has already been played in!");

    let (status, body) = send(&app, "GET", "/game?id=0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["historyLength"], 2);
}

#[tokio::test]
async fn test_ai_move_and_jump_back() {
    let app = router(2);
    send(&app, "POST", "/game/create").await;
    send(&app, "POST", "/game/play?id=0&index=0").await;

    let (status, body) = send(&app, "POST", "/game/play/ai?id=0").await;
    assert_eq!(status, StatusCode::OK);
    let board = json(&body);
    assert_eq!(board["historyLength"], 3);
    assert_eq!(board["currentPlayer"], 1);

    let (status, body) = send(&app, "POST", "/game/jump?id=0&step=0").await;
    assert_eq!(status, StatusCode::OK);
    let board = json(&body);
    assert_eq!(board["historyLength"], 1);
    assert_eq!(board["currentSubBoard"], 4);

    let (status, body) = send(&app, "POST", "/game/jump?id=0&step=5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Error: History step out of range");
}

#[tokio::test]
async fn test_parameter_validation() {
    let app = router(2);
    send(&app, "POST", "/game/create").await;

    let cases = [
        ("GET", "/game", StatusCode::BAD_REQUEST, "Error: Please provide the game ID"),
        ("GET", "/game?id=x", StatusCode::BAD_REQUEST, "Error: Game ID provided was not a number"),
        ("GET", "/game?id=7", StatusCode::NOT_FOUND, "Error: Ongoing game with ID 7 was not found."),
        ("GET", "/game?id=-2", StatusCode::NOT_FOUND, "Error: Ongoing game with ID -2 was not found."),
        (
            "POST",
            "/game/play?id=0",
            StatusCode::BAD_REQUEST,
            "Error: Please provide the index of the intended play.",
        ),
        ("POST", "/game/play?id=0&index=a", StatusCode::BAD_REQUEST, "Error: Index provided not number"),
        ("POST", "/game/play?id=0&index=9", StatusCode::BAD_REQUEST, "Error: Index provided was out of bounds"),
        (
            "POST",
            "/game/jump?id=0",
            StatusCode::BAD_REQUEST,
            "Error: Please provide the step of history to jump to.",
        ),
        ("POST", "/game/jump?id=0&step=z", StatusCode::BAD_REQUEST, "Error: Step provided not number"),
    ];
    for (method, uri, status, message) in cases {
        let (actual_status, body) = send(&app, method, uri).await;
        assert_eq!(actual_status, status, "{} {}", method, uri);
        assert_eq!(body, message, "{} {}", method, uri);
    }
}

#[tokio::test]
async fn test_capacity_ping_and_close() {
    let app = router(1);
    assert_eq!(send(&app, "POST", "/game/create").await.1, "0");

    let (status, body) = send(&app, "POST", "/game/create").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        "Error: Max number of concurrent game has been hit. Try play again later."
    );

    assert_eq!(send(&app, "GET", "/game/ping?id=0").await, (StatusCode::OK, "true".to_string()));
    assert_eq!(send(&app, "DELETE", "/game/close?id=0").await.0, StatusCode::OK);
    assert_eq!(send(&app, "GET", "/game?id=0").await.0, StatusCode::NOT_FOUND);

    assert_eq!(send(&app, "POST", "/game/create").await.1, "0");
    assert_eq!(send(&app, "DELETE", "/game?id=0").await.0, StatusCode::OK);
    assert_eq!(send(&app, "GET", "/game/ping?id=0").await.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_redirect_into_full_sub_board_rejected() {
    let app = router(1);
    send(&app, "POST", "/game/create").await;
    // X fills the centre while O always answers in a centre cell, sending X back.
    for index in [0, 4, 1, 4, 2, 4, 3, 4, 5, 4, 6, 4, 7, 4, 8, 4, 4] {
        let (status, _) = send(&app, "POST", &format!("/game/play?id=0&index={}", index)).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (_, body) = send(&app, "GET", "/game?id=0").await;
    let board = json(&body);
    assert_eq!(board["currentSubBoard"], 4);
    assert_eq!(board["currentPlayer"], -1);

    let (status, body) = send(&app, "POST", "/game/play?id=0&index=4").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Error: Chosen sub-board is already full!");

    let (status, body) = send(&app, "POST", "/game/play?id=0&index=6").await;
    assert_eq!(status, StatusCode::OK);
    let board = json(&body);
    assert_eq!(board["currentSubBoard"], 6);
    assert_eq!(board["currentPlayer"], -1);
    assert_eq!(board["historyLength"], 19);
}

#[tokio::test]
async fn test_finished_game_rejects_moves() {
    let app = router(1);
    send(&app, "POST", "/game/create").await;

    let mut state = GameState::new();
    while let Some(&action) = state.legal_actions().first() {
        let (status, _) = send(&app, "POST", &format!("/game/play?id=0&index={}", action)).await;
        assert_eq!(status, StatusCode::OK);
        state.apply(action);
    }
    let winner = state.winner().describe().unwrap();

    let (status, body) = send(&app, "POST", "/game/play?id=0&index=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, format!("Error: Game has already been won by {}", winner));

    let (status, body) = send(&app, "POST", "/game/play/ai?id=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Error: Game already Ended");
}
