use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use contracts::domain::barque::{Barque, CreateBarqueDto, ImportResult, UpdateBarqueDto};
use contracts::shared::pagination::Paginated;

use crate::domain::barque;
use crate::domain::gerant;
use crate::shared::error::ApiError;

#[derive(Deserialize)]
pub struct ListBarquesQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
}

/// GET /api/barques?page&limit&search
pub async fn list(
    Query(params): Query<ListBarquesQuery>,
) -> Result<Json<Paginated<Barque>>, ApiError> {
    let page = params.page.unwrap_or(1).max(1);
    let limit = params.limit.unwrap_or(10).min(50);
    let result = barque::service::list(page, limit, params.search.as_deref()).await?;
    Ok(Json(result))
}

/// POST /api/barques
pub async fn create(
    Json(dto): Json<CreateBarqueDto>,
) -> Result<(StatusCode, Json<Barque>), ApiError> {
    let barque = barque::service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(barque)))
}

/// PUT /api/barques/:id
pub async fn update(
    Path(id): Path<i32>,
    Json(dto): Json<UpdateBarqueDto>,
) -> Result<Json<Barque>, ApiError> {
    let barque = barque::service::update(id, dto).await?;
    Ok(Json(barque))
}

/// DELETE /api/barques/:id
pub async fn delete(Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    barque::service::delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/barques/bulk
///
/// Répond 200 même quand la validation échoue : c'est le drapeau `success`
/// du corps qui porte l'issue, pas le statut HTTP. 400 est réservé aux corps
/// qui ne sont pas un tableau non vide.
pub async fn bulk_import(
    Json(body): Json<serde_json::Value>,
) -> Result<Json<ImportResult>, ApiError> {
    let Some(items) = body.as_array() else {
        return Err(ApiError::BadRequest(
            "Invalid data format. Expected an array of barques.".to_string(),
        ));
    };
    if items.is_empty() {
        return Err(ApiError::BadRequest("Empty array provided.".to_string()));
    }
    let barques: Vec<CreateBarqueDto> = serde_json::from_value(body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid barque payload: {e}")))?;

    let result = barque::bulk_import::bulk_import(barques).await?;
    Ok(Json(result))
}

/// POST /api/barques/init-default-gerant
pub async fn init_default_gerant() -> Result<Json<serde_json::Value>, ApiError> {
    let gerant = gerant::service::ensure_default_gerant().await?;
    Ok(Json(json!({ "success": true, "gerant": gerant })))
}
