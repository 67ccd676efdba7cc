use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use contracts::domain::tarif::{CreateTarifDto, Tarif, UpdateTarifDto};

use crate::domain::tarif;
use crate::shared::error::ApiError;

#[derive(Deserialize)]
pub struct ListTarifsQuery {
    pub actif: Option<bool>,
}

/// GET /api/gerants/:gid/tarifs
pub async fn list(
    Path(gerant_id): Path<i32>,
    Query(params): Query<ListTarifsQuery>,
) -> Result<Json<Vec<Tarif>>, ApiError> {
    let items = tarif::service::list(gerant_id, params.actif).await?;
    Ok(Json(items))
}

/// POST /api/gerants/:gid/tarifs
pub async fn create(
    Path(gerant_id): Path<i32>,
    Json(dto): Json<CreateTarifDto>,
) -> Result<(StatusCode, Json<Tarif>), ApiError> {
    let item = tarif::service::create(gerant_id, dto).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/gerants/:gid/tarifs/:id
pub async fn update(
    Path((gerant_id, id)): Path<(i32, i32)>,
    Json(dto): Json<UpdateTarifDto>,
) -> Result<Json<Tarif>, ApiError> {
    let item = tarif::service::update(gerant_id, id, dto).await?;
    Ok(Json(item))
}

/// DELETE /api/gerants/:gid/tarifs/:id
pub async fn delete(Path((gerant_id, id)): Path<(i32, i32)>) -> Result<StatusCode, ApiError> {
    tarif::service::delete(gerant_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
