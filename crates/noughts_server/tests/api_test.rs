//! In-process tests for the REST API, driven through the router directly.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use noughts_engine::{GameSnapshot, Series};
use noughts_server::router;
use serde_json::json;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

fn app() -> Router {
    router(Arc::new(Mutex::new(Series::new())))
}

async fn get_snapshot(app: &Router, uri: &str) -> GameSnapshot {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.expect("body").to_bytes();
    serde_json::from_slice(&body).expect("snapshot json")
}

async fn post_snapshot(app: &Router, uri: &str, body: Option<serde_json::Value>) -> GameSnapshot {
    let request = match body {
        Some(value) => Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .expect("request"),
        None => Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.expect("body").to_bytes();
    serde_json::from_slice(&body).expect("snapshot json")
}

async fn play(app: &Router, row: usize, col: usize) -> GameSnapshot {
    post_snapshot(app, "/api/move", Some(json!({ "row": row, "col": col }))).await
}

#[tokio::test]
async fn test_fresh_game_state() {
    let app = app();
    let snapshot = get_snapshot(&app, "/api/game").await;

    assert_eq!(snapshot.current_player, 'X');
    assert!(!snapshot.game_over);
    assert_eq!(snapshot.winner, ' ');
    assert!(snapshot.winning_line.is_empty());
    assert!(snapshot.board.iter().flatten().all(|&c| c == ' '));
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_move_sequence_reports_win() {
    let app = app();

    // X: (0,0), (1,1), (2,2). O: (0,1), (0,2).
    play(&app, 0, 0).await;
    play(&app, 0, 1).await;
    play(&app, 1, 1).await;
    play(&app, 0, 2).await;
    let snapshot = play(&app, 2, 2).await;

    assert!(snapshot.game_over);
    assert_eq!(snapshot.winner, 'X');
    assert_eq!(snapshot.winning_line, vec![0, 4, 8]);
    assert_eq!(snapshot.scores.wins_x(), 1);
    assert_eq!(snapshot.status_line(), "Player X Wins!");
}

#[tokio::test]
async fn test_illegal_move_echoes_unchanged_state() {
    let app = app();

    let first = play(&app, 1, 1).await;
    assert_eq!(first.current_player, 'O');

    // Same square again: 200, nothing moves.
    let second = play(&app, 1, 1).await;
    assert_eq!(second, first);
}

#[tokio::test]
async fn test_out_of_range_coordinates_ignored() {
    let app = app();

    let before = get_snapshot(&app, "/api/game").await;
    let after = play(&app, 7, 0).await;

    assert_eq!(after, before);
}

#[tokio::test]
async fn test_moves_after_game_over_ignored() {
    let app = app();

    play(&app, 0, 0).await;
    play(&app, 0, 1).await;
    play(&app, 1, 1).await;
    play(&app, 0, 2).await;
    let won = play(&app, 2, 2).await;

    let after = play(&app, 2, 0).await;
    assert_eq!(after, won);
}

#[tokio::test]
async fn test_reset_clears_board_and_preserves_scores() {
    let app = app();

    play(&app, 0, 0).await;
    play(&app, 0, 1).await;
    play(&app, 1, 1).await;
    play(&app, 0, 2).await;
    play(&app, 2, 2).await;

    let snapshot = post_snapshot(&app, "/api/reset", None).await;

    assert!(!snapshot.game_over);
    assert_eq!(snapshot.current_player, 'X');
    assert!(snapshot.winning_line.is_empty());
    assert!(snapshot.board.iter().flatten().all(|&c| c == ' '));
    assert_eq!(snapshot.scores.wins_x(), 1);
}

#[tokio::test]
async fn test_reset_scores_preserves_board() {
    let app = app();

    play(&app, 0, 0).await;
    play(&app, 0, 1).await;
    play(&app, 1, 1).await;
    play(&app, 0, 2).await;
    play(&app, 2, 2).await;
    post_snapshot(&app, "/api/reset", None).await;
    let mid_round = play(&app, 1, 1).await;
    assert_eq!(mid_round.scores.wins_x(), 1);

    let snapshot = post_snapshot(&app, "/api/reset-scores", None).await;

    assert_eq!(snapshot.scores.wins_x(), 0);
    assert_eq!(snapshot.scores.wins_o(), 0);
    assert_eq!(snapshot.scores.ties(), 0);
    assert_eq!(snapshot.board, mid_round.board);
    assert_eq!(snapshot.current_player, 'O');
}

#[tokio::test]
async fn test_malformed_move_body_rejected() {
    let app = app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/move")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("not json"))
                .expect("request"),
        )
        .await
        .expect("response");

    assert!(response.status().is_client_error());

    // State is untouched by the rejected request.
    let snapshot = get_snapshot(&app, "/api/game").await;
    assert!(snapshot.board.iter().flatten().all(|&c| c == ' '));
}
