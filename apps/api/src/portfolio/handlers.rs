//! HTTP handlers for portfolio persistence.

use axum::{extract::State, Json};
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/v1/portfolio
///
/// Returns the stored portfolio document, or the default empty portfolio when
/// nothing has been saved yet.
pub async fn handle_get_portfolio(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let doc = state.portfolio.load().await?;
    Ok(Json(doc))
}

/// POST /api/v1/portfolio
///
/// Persists the posted document verbatim, stamping `updated_at` (and
/// `created_at` on first save). Returns the document as written.
pub async fn handle_save_portfolio(
    State(state): State<AppState>,
    Json(doc): Json<Map<String, Value>>,
) -> Result<Json<Value>, AppError> {
    let saved = state.portfolio.save(doc).await?;
    Ok(Json(saved))
}
