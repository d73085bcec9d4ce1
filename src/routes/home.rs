use askama::Template;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::db;
use crate::error::AppResult;
use crate::routes::site::PostView;
use crate::state::AppState;

/// Number of announcements teased on the home page.
const HOME_POSTS: usize = 3;

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub site_name: String,
    pub nav: &'static str,
    pub latest: Vec<PostView>,
}

/// Wrapper to render askama templates as axum responses
pub struct Html<T: Template>(pub T);

impl<T: Template> IntoResponse for Html<T> {
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(body) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                body,
            )
                .into_response(),
            Err(e) => {
                tracing::error!("Template render error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
            }
        }
    }
}

pub async fn index(State(state): State<AppState>) -> AppResult<Response> {
    let latest = db::posts::list(&state.db)?
        .into_iter()
        .take(HOME_POSTS)
        .map(PostView::from)
        .collect();

    Ok(Html(HomeTemplate {
        site_name: state.config.site.name.clone(),
        nav: "home",
        latest,
    })
    .into_response())
}
