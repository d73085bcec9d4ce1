use askama::Template;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::db;
use crate::db::models::BlogPost;
use crate::error::AppResult;
use crate::routes::home::{self, Html};
use crate::state::AppState;

/// A blog post prepared for display.
pub struct PostView {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub author: String,
    pub date: String,
}

impl From<BlogPost> for PostView {
    fn from(post: BlogPost) -> Self {
        Self {
            date: post.created_at.format("%B %-d, %Y").to_string(),
            id: post.id,
            title: post.title,
            content: post.content,
            image_url: post.image_url,
            author: post.author,
        }
    }
}

impl PostView {
    /// First paragraph, for list views.
    pub fn excerpt(&self) -> &str {
        self.content
            .split("\n\n")
            .next()
            .unwrap_or(self.content.as_str())
    }
}

#[derive(Template)]
#[template(path = "pages/about.html")]
struct AboutTemplate {
    site_name: String,
    nav: &'static str,
    content: String,
}

#[derive(Template)]
#[template(path = "pages/contact.html")]
struct ContactTemplate {
    site_name: String,
    nav: &'static str,
}

#[derive(Template)]
#[template(path = "pages/events.html")]
struct EventsTemplate {
    site_name: String,
    nav: &'static str,
    posts: Vec<PostView>,
}

#[derive(Template)]
#[template(path = "pages/event.html")]
struct EventTemplate {
    site_name: String,
    nav: &'static str,
    post: PostView,
}

#[derive(Template)]
#[template(path = "pages/privacy.html")]
struct PrivacyTemplate {
    site_name: String,
    nav: &'static str,
    contact_email: String,
}

#[derive(Template)]
#[template(path = "pages/not_found.html")]
struct NotFoundTemplate {
    site_name: String,
    nav: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/about", get(about))
        .route("/contact", get(contact))
        .route("/events", get(events))
        .route("/events/{id}", get(event))
        .route("/privacy", get(privacy))
}

async fn about(State(state): State<AppState>) -> AppResult<Response> {
    let about = db::about::get(&state.db)?;
    Ok(Html(AboutTemplate {
        site_name: state.config.site.name.clone(),
        nav: "about",
        content: about.content,
    })
    .into_response())
}

async fn contact(State(state): State<AppState>) -> Response {
    Html(ContactTemplate {
        site_name: state.config.site.name.clone(),
        nav: "contact",
    })
    .into_response()
}

async fn events(State(state): State<AppState>) -> AppResult<Response> {
    let posts = db::posts::list(&state.db)?
        .into_iter()
        .map(PostView::from)
        .collect();

    Ok(Html(EventsTemplate {
        site_name: state.config.site.name.clone(),
        nav: "events",
        posts,
    })
    .into_response())
}

async fn event(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Response> {
    let Some(post) = db::posts::find(&state.db, &id)? else {
        return Ok(not_found(State(state)).await);
    };

    Ok(Html(EventTemplate {
        site_name: state.config.site.name.clone(),
        nav: "events",
        post: PostView::from(post),
    })
    .into_response())
}

async fn privacy(State(state): State<AppState>) -> Response {
    Html(PrivacyTemplate {
        site_name: state.config.site.name.clone(),
        nav: "privacy",
        contact_email: state.config.site.contact_email.clone(),
    })
    .into_response()
}

/// Fallback for unknown paths.
pub async fn not_found(State(state): State<AppState>) -> Response {
    let page = Html(NotFoundTemplate {
        site_name: state.config.site.name.clone(),
        nav: "",
    });
    (StatusCode::NOT_FOUND, page).into_response()
}
