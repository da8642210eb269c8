//! Axum route handlers for the session API. Every handler answers with the
//! view snapshot after its action.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::session::flow::advance_assessment;
use crate::session::view::SessionView;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub text: String,
}

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionView> {
    Json(state.session.lock().await.view())
}

/// POST /api/v1/session/start
pub async fn handle_start(State(state): State<AppState>) -> Result<Json<SessionView>, AppError> {
    let mut session = state.session.lock().await;
    session.start()?;
    Ok(Json(session.view()))
}

/// PUT /api/v1/session/assessment/answer
pub async fn handle_answer(
    State(state): State<AppState>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<SessionView>, AppError> {
    let mut session = state.session.lock().await;
    session.set_answer(request.text)?;
    Ok(Json(session.view()))
}

/// POST /api/v1/session/assessment/next
///
/// On the last step this holds the response until the recommendation
/// request settles, then returns the results or error view. A client that
/// disconnects early does not stop the request; poll GET /api/v1/session.
pub async fn handle_next(State(state): State<AppState>) -> Result<Json<SessionView>, AppError> {
    let view = advance_assessment(state.session.clone(), state.recommender.clone()).await?;
    Ok(Json(view))
}

/// POST /api/v1/session/results/:index/toggle
pub async fn handle_toggle_card(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<SessionView>, AppError> {
    let mut session = state.session.lock().await;
    session.toggle_card(index)?;
    Ok(Json(session.view()))
}

/// POST /api/v1/session/retry
pub async fn handle_retry(State(state): State<AppState>) -> Result<Json<SessionView>, AppError> {
    let mut session = state.session.lock().await;
    session.retry()?;
    Ok(Json(session.view()))
}

/// POST /api/v1/session/reset
pub async fn handle_reset(State(state): State<AppState>) -> Result<Json<SessionView>, AppError> {
    let mut session = state.session.lock().await;
    session.reset()?;
    Ok(Json(session.view()))
}
