pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::session::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/session", get(handlers::handle_get_session))
        .route("/api/v1/session/start", post(handlers::handle_start))
        .route(
            "/api/v1/session/assessment/answer",
            put(handlers::handle_answer),
        )
        .route(
            "/api/v1/session/assessment/next",
            post(handlers::handle_next),
        )
        .route(
            "/api/v1/session/results/:index/toggle",
            post(handlers::handle_toggle_card),
        )
        .route("/api/v1/session/retry", post(handlers::handle_retry))
        .route("/api/v1/session/reset", post(handlers::handle_reset))
        .with_state(state)
}
