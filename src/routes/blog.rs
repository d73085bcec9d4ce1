use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::db;
use crate::db::models::{BlogPost, BlogPostChanges, NewBlogPost};
use crate::error::{AppError, AppResult};
use crate::extractors::{AdminSession, ApiJson};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/blog-posts", get(list_posts).post(create_post))
        .route(
            "/api/blog-posts/{id}",
            get(get_post).put(update_post).delete(delete_post),
        )
}

/// GET /api/blog-posts: newest first
async fn list_posts(State(state): State<AppState>) -> AppResult<Json<Vec<BlogPost>>> {
    Ok(Json(db::posts::list(&state.db)?))
}

/// GET /api/blog-posts/{id}
async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BlogPost>> {
    db::posts::find(&state.db, &id)?
        .map(Json)
        .ok_or(AppError::NotFound)
}

/// POST /api/blog-posts (admin)
async fn create_post(
    State(state): State<AppState>,
    admin: AdminSession,
    ApiJson(req): ApiJson<NewBlogPost>,
) -> AppResult<(StatusCode, Json<BlogPost>)> {
    let input = req.normalize()?;
    let post = db::posts::create(&state.db, &input, &admin.email)?;
    tracing::info!("Blog post {} created by {}", post.id, admin.email);
    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /api/blog-posts/{id}: partial update (admin)
async fn update_post(
    State(state): State<AppState>,
    admin: AdminSession,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<BlogPostChanges>,
) -> AppResult<Json<BlogPost>> {
    let changes = req.normalize()?;
    let post = db::posts::update(&state.db, &id, &changes)?;
    tracing::info!("Blog post {} updated by {}", post.id, admin.email);
    Ok(Json(post))
}

/// DELETE /api/blog-posts/{id} (admin)
async fn delete_post(
    State(state): State<AppState>,
    admin: AdminSession,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    if !db::posts::delete(&state.db, &id)? {
        return Err(AppError::NotFound);
    }
    tracing::info!("Blog post {} deleted by {}", id, admin.email);
    Ok(Json(json!({ "message": "Blog post deleted successfully" })))
}
