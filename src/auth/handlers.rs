use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::auth::{password, session};
use crate::db;
use crate::error::{AppError, AppResult};
use crate::extractors::{AdminSession, ApiJson};
use crate::state::AppState;
use crate::validation;

// -- Request / response types --

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

#[derive(Deserialize)]
pub struct CredentialUpdateRequest {
    pub email: Option<String>,
    #[serde(default)]
    pub current_password: String,
    pub new_password: Option<String>,
}

// -- Handlers --

/// POST /api/admin/login: check email + password, issue a bearer token
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let credential = db::admin::get_credential(&state.db)?;

    let email_matches = req.email.trim().eq_ignore_ascii_case(&credential.email);
    if !email_matches || !password::verify(&req.password, &credential.password_hash)? {
        tracing::warn!("Failed admin login for {}", req.email.trim());
        return Err(AppError::InvalidLogin);
    }

    session::purge_expired(&state.db)?;
    let token = session::create_session(&state.db, state.config.auth.session_hours)?;
    tracing::info!("Admin {} logged in", credential.email);

    Ok(Json(LoginResponse {
        access_token: token,
        token_type: "bearer",
    }))
}

/// POST /api/admin/update: change email and/or password; requires the current password
pub async fn update_credentials(
    State(state): State<AppState>,
    admin: AdminSession,
    ApiJson(req): ApiJson<CredentialUpdateRequest>,
) -> AppResult<Json<Value>> {
    let credential = db::admin::get_credential(&state.db)?;
    if !password::verify(&req.current_password, &credential.password_hash)? {
        return Err(AppError::BadRequest("Current password is incorrect".into()));
    }

    let new_email = req
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(validation::email)
        .transpose()?;
    let new_password = validation::new_password(req.new_password.as_deref())?;

    if new_email.is_none() && new_password.is_none() {
        return Err(AppError::BadRequest(
            "Provide a new email or a new password".into(),
        ));
    }

    let new_hash = new_password
        .map(|p| password::hash(p, state.config.auth.bcrypt_cost))
        .transpose()?;

    let updated =
        db::admin::update_credential(&state.db, new_email.as_deref(), new_hash.as_deref())?;

    if new_hash.is_some() {
        let revoked = session::delete_other_sessions(&state.db, &admin.token)?;
        tracing::info!("Admin password changed, revoked {} other session(s)", revoked);
    }
    if updated.email != admin.email {
        tracing::info!("Admin email changed from {} to {}", admin.email, updated.email);
    }

    Ok(Json(
        json!({ "message": "Admin credentials updated successfully" }),
    ))
}

/// POST /api/admin/logout: revoke the presented token
pub async fn logout(
    State(state): State<AppState>,
    admin: AdminSession,
) -> AppResult<Json<Value>> {
    session::delete_session(&state.db, &admin.token)?;
    Ok(Json(json!({ "message": "Logged out" })))
}

/// GET /api/admin/session: lets the console check a stored token is still live
pub async fn session_info(admin: AdminSession) -> Json<Value> {
    Json(json!({ "email": admin.email }))
}
