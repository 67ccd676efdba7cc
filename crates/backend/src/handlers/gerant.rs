use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use contracts::domain::barque::Barque;
use contracts::domain::gerant::{CineCheck, CreateGerantDto, Gerant, UpdateGerantDto};

use crate::domain::gerant;
use crate::shared::error::ApiError;

/// GET /api/gerants
pub async fn list() -> Result<Json<Vec<Gerant>>, ApiError> {
    let gerants = gerant::service::list_all().await?;
    Ok(Json(gerants))
}

/// POST /api/gerants
pub async fn create(
    Json(dto): Json<CreateGerantDto>,
) -> Result<(StatusCode, Json<Gerant>), ApiError> {
    let gerant = gerant::service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(gerant)))
}

/// PUT /api/gerants/:id — mise à jour partielle, les champs absents sont
/// conservés (comportement historique, proche d'un PATCH).
pub async fn update(
    Path(id): Path<i32>,
    Json(dto): Json<UpdateGerantDto>,
) -> Result<Json<Gerant>, ApiError> {
    let gerant = gerant::service::update(id, dto).await?;
    Ok(Json(gerant))
}

/// DELETE /api/gerants/:id
pub async fn delete(Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    gerant::service::delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct CheckCineQuery {
    pub exclude_id: Option<i32>,
}

/// GET /api/gerants/check-cine/:cine?exclude_id=
///
/// Contrôle d'unicité distant, séparé de la validation de forme locale.
pub async fn check_cine(
    Path(cine): Path<String>,
    Query(params): Query<CheckCineQuery>,
) -> Result<Json<CineCheck>, ApiError> {
    let exists = gerant::service::check_cine(cine.trim(), params.exclude_id).await?;
    Ok(Json(CineCheck { exists }))
}

/// GET /api/gerants/:id/barques
pub async fn barques(Path(id): Path<i32>) -> Result<Json<Vec<Barque>>, ApiError> {
    let barques = gerant::service::barques_of(id).await?;
    Ok(Json(barques))
}
