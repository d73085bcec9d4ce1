use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::db;
use crate::db::models::{
    BusinessContact, IndividualContact, NewBusinessContact, NewIndividualContact,
};
use crate::error::AppResult;
use crate::extractors::{AdminSession, ApiJson};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/contact/individual",
            get(list_individual).post(submit_individual),
        )
        .route(
            "/api/contact/business",
            get(list_business).post(submit_business),
        )
}

/// POST /api/contact/individual: public form
async fn submit_individual(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<NewIndividualContact>,
) -> AppResult<(StatusCode, Json<IndividualContact>)> {
    let input = req.normalize()?;
    let contact = db::contacts::create_individual(&state.db, &input)?;
    tracing::info!("Individual contact {} received", contact.id);
    Ok((StatusCode::CREATED, Json(contact)))
}

/// POST /api/contact/business: public form
async fn submit_business(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<NewBusinessContact>,
) -> AppResult<(StatusCode, Json<BusinessContact>)> {
    let input = req.normalize()?;
    let contact = db::contacts::create_business(&state.db, &input)?;
    tracing::info!("Business contact {} received", contact.id);
    Ok((StatusCode::CREATED, Json(contact)))
}

/// GET /api/contact/individual (admin)
async fn list_individual(
    State(state): State<AppState>,
    _admin: AdminSession,
) -> AppResult<Json<Vec<IndividualContact>>> {
    Ok(Json(db::contacts::list_individual(&state.db)?))
}

/// GET /api/contact/business (admin)
async fn list_business(
    State(state): State<AppState>,
    _admin: AdminSession,
) -> AppResult<Json<Vec<BusinessContact>>> {
    Ok(Json(db::contacts::list_business(&state.db)?))
}
