pub mod about;
pub mod assets;
pub mod auth;
pub mod blog;
pub mod console;
pub mod contact;
pub mod home;
pub mod site;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Full application: JSON API under `/api`, public pages, admin console and assets.
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server);

    let api = Router::new()
        .route("/api", get(api_root))
        .merge(about::router())
        .merge(blog::router())
        .merge(contact::router())
        .merge(auth::router())
        .layer(cors);

    Router::new()
        .merge(api)
        .merge(site::router())
        .merge(console::router())
        .route("/assets/{*path}", get(assets::serve))
        .fallback(site::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /api: liveness probe
async fn api_root() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if server.cors_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = server
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}
