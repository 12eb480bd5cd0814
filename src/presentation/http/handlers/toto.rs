//! Toto Handlers
//!
//! A missing toto is a bare 404 status with no body, produced here from
//! the service's `None` / `false` results.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::parse_id;
use crate::presentation::http::extractors::ValidatedJson;
use crate::application::services::TotoDto;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Get all totos
pub async fn get_all_totos(State(state): State<AppState>) -> Result<Json<Vec<TotoDto>>, AppError> {
    Ok(Json(state.totos.get_all().await?))
}

/// Get a toto by ID
pub async fn get_toto(
    State(state): State<AppState>,
    Path(toto_id): Path<String>,
) -> Result<Response, AppError> {
    let toto_id = parse_id(&toto_id, "toto")?;

    let response = match state.totos.get_by_id(toto_id).await? {
        Some(dto) => Json(dto).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    };

    Ok(response)
}

/// Create a new toto
pub async fn create_toto(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<TotoDto>,
) -> Result<(StatusCode, Json<TotoDto>), AppError> {
    let created = state.totos.create(body).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace an existing toto
pub async fn update_toto(
    State(state): State<AppState>,
    Path(toto_id): Path<String>,
    ValidatedJson(body): ValidatedJson<TotoDto>,
) -> Result<StatusCode, AppError> {
    let toto_id = parse_id(&toto_id, "toto")?;
    let updated = state.totos.update(toto_id, body).await?;

    Ok(if updated { StatusCode::OK } else { StatusCode::NOT_FOUND })
}

/// Delete a toto by ID
pub async fn delete_toto(
    State(state): State<AppState>,
    Path(toto_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let toto_id = parse_id(&toto_id, "toto")?;

    let deleted = state.totos.delete(toto_id).await?;

    Ok(if deleted {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    })
}

/// Return the `demo.patate` configuration value for diagnostics
pub async fn get_patate(State(state): State<AppState>) -> String {
    state.settings.demo.patate.clone()
}
