use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::header;
use axum::http::request::Parts;
use axum::Json;

use crate::auth::session;
use crate::db;
use crate::error::AppError;
use crate::state::AppState;

/// The authenticated admin behind a request.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub token: String,
    pub email: String,
}

/// Extractor that requires a live bearer token.
/// Missing, unknown and expired tokens are all rejected with 401.
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(parts).ok_or(AppError::Unauthorized)?;

        if !session::is_valid(&state.db, token)? {
            return Err(AppError::Unauthorized);
        }

        let credential = db::admin::get_credential(&state.db)?;
        Ok(AdminSession {
            token: token.to_string(),
            email: credential.email,
        })
    }
}

/// JSON body whose rejections surface as `AppError::BadRequest`, so a bad
/// payload gets the same `{"detail"}` body as every other API error.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = axum::extract::rejection::JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(value))
    }
}

fn extract_bearer_token(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}
