use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::db;
use crate::db::models::AboutContent;
use crate::error::{AppError, AppResult};
use crate::extractors::{AdminSession, ApiJson};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AboutUpdate {
    pub content: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/about-us", get(get_about).put(update_about))
}

/// GET /api/about-us
async fn get_about(State(state): State<AppState>) -> AppResult<Json<AboutContent>> {
    Ok(Json(db::about::get(&state.db)?))
}

/// PUT /api/about-us: overwrite the About text (admin)
async fn update_about(
    State(state): State<AppState>,
    admin: AdminSession,
    ApiJson(req): ApiJson<AboutUpdate>,
) -> AppResult<Json<AboutContent>> {
    if req.content.trim().is_empty() {
        return Err(AppError::BadRequest("Content is required".into()));
    }

    let about = db::about::update(&state.db, &req.content, &admin.email)?;
    tracing::info!("About content updated by {}", admin.email);
    Ok(Json(about))
}
