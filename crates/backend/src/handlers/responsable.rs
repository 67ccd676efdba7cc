use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use contracts::domain::responsable::{CreateResponsableDto, Responsable, UpdateResponsableDto};

use crate::domain::responsable;
use crate::shared::error::ApiError;

#[derive(Deserialize)]
pub struct ListResponsablesQuery {
    pub actif: Option<bool>,
}

/// GET /api/gerants/:gid/responsables
pub async fn list(
    Path(gerant_id): Path<i32>,
    Query(params): Query<ListResponsablesQuery>,
) -> Result<Json<Vec<Responsable>>, ApiError> {
    let items = responsable::service::list(gerant_id, params.actif).await?;
    Ok(Json(items))
}

/// POST /api/gerants/:gid/responsables
pub async fn create(
    Path(gerant_id): Path<i32>,
    Json(dto): Json<CreateResponsableDto>,
) -> Result<(StatusCode, Json<Responsable>), ApiError> {
    let item = responsable::service::create(gerant_id, dto).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/gerants/:gid/responsables/:id
pub async fn update(
    Path((gerant_id, id)): Path<(i32, i32)>,
    Json(dto): Json<UpdateResponsableDto>,
) -> Result<Json<Responsable>, ApiError> {
    let item = responsable::service::update(gerant_id, id, dto).await?;
    Ok(Json(item))
}

/// DELETE /api/gerants/:gid/responsables/:id
pub async fn delete(Path((gerant_id, id)): Path<(i32, i32)>) -> Result<StatusCode, ApiError> {
    responsable::service::delete(gerant_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
