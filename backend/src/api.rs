use crate::error::ApiError;
use axum::{extract::State, routing::post, Json, Router};
use chess_search::SearchSettings;
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub settings: SearchSettings,
}

impl AppState {
    pub fn new(settings: SearchSettings) -> Self {
        Self { settings }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BestMoveRequest {
    pub fen: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BestMoveResponse {
    /// Position after the engine's move
    pub fen: String,
    pub best_move: String,
    pub score: i32,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/best-move", post(best_move))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn best_move(
    State(state): State<AppState>,
    Json(payload): Json<BestMoveRequest>,
) -> Result<Json<BestMoveResponse>, ApiError> {
    let settings = state.settings;
    info!(fen = %payload.fen, depth = settings.depth, "best move requested");

    // The search is synchronous and CPU-bound; each request decodes its own board.
    let reply = tokio::task::spawn_blocking(move || chess_search::reply(&payload.fen, &settings))
        .await??;

    info!(
        best_move = %reply.best_move,
        score = reply.score,
        nodes = reply.stats.nodes,
        cutoffs = reply.stats.cutoffs,
        "best move found"
    );

    Ok(Json(BestMoveResponse {
        fen: reply.fen,
        best_move: reply.best_move,
        score: reply.score,
    }))
}
