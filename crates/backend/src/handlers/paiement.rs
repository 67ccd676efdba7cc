use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use contracts::domain::paiement::{CreatePaiementDto, Paiement, PaiementSummary};

use crate::domain::paiement;
use crate::shared::error::ApiError;

/// GET /api/gerants/:gid/paiements
pub async fn list(Path(gerant_id): Path<i32>) -> Result<Json<Vec<Paiement>>, ApiError> {
    let items = paiement::service::list(gerant_id).await?;
    Ok(Json(items))
}

/// POST /api/gerants/:gid/paiements
pub async fn create(
    Path(_gerant_id): Path<i32>,
    Json(dto): Json<CreatePaiementDto>,
) -> Result<(StatusCode, Json<Paiement>), ApiError> {
    let item = paiement::service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[derive(Deserialize)]
pub struct SummaryQuery {
    pub annee: i32,
    pub mois: u32,
}

/// GET /api/gerants/:gid/paiements/summary?annee&mois
pub async fn summary(
    Path(gerant_id): Path<i32>,
    Query(params): Query<SummaryQuery>,
) -> Result<Json<PaiementSummary>, ApiError> {
    let summary = paiement::service::summary(gerant_id, params.annee, params.mois).await?;
    Ok(Json(summary))
}
