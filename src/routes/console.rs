use askama::Template;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::routes::home::Html;
use crate::state::AppState;

// The console pages are static shells. `assets/js/admin.js` keeps the
// bearer token in localStorage and drives the admin API.

#[derive(Template)]
#[template(path = "admin/login.html")]
struct AdminLoginTemplate {
    site_name: String,
    nav: &'static str,
}

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
struct AdminDashboardTemplate {
    site_name: String,
    nav: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin", get(dashboard))
        .route("/admin/login", get(login_page))
}

async fn login_page(State(state): State<AppState>) -> Response {
    Html(AdminLoginTemplate {
        site_name: state.config.site.name.clone(),
        nav: "admin",
    })
    .into_response()
}

async fn dashboard(State(state): State<AppState>) -> Response {
    Html(AdminDashboardTemplate {
        site_name: state.config.site.name.clone(),
        nav: "admin",
    })
    .into_response()
}
