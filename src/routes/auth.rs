use axum::routing::{get, post};
use axum::Router;

use crate::auth::handlers;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/admin/login", post(handlers::login))
        .route("/api/admin/update", post(handlers::update_credentials))
        .route("/api/admin/logout", post(handlers::logout))
        .route("/api/admin/session", get(handlers::session_info))
}
