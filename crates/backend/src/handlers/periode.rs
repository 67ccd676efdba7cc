use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use contracts::domain::periode::{
    GeneratePeriodesRequest, Periode, PeriodeStatut, UpdatePeriodeDto,
};

use crate::domain::periode;
use crate::shared::error::ApiError;

#[derive(Deserialize)]
pub struct ListPeriodesQuery {
    pub annee: Option<i32>,
    pub mois: Option<u32>,
    pub statut: Option<PeriodeStatut>,
}

/// GET /api/gerants/:gid/periodes?annee&mois&statut
pub async fn list(
    Path(gerant_id): Path<i32>,
    Query(params): Query<ListPeriodesQuery>,
) -> Result<Json<Vec<Periode>>, ApiError> {
    let items =
        periode::service::list(gerant_id, params.annee, params.mois, params.statut).await?;
    Ok(Json(items))
}

/// PUT /api/gerants/:gid/periodes/:id
pub async fn update(
    Path((_gerant_id, id)): Path<(i32, i32)>,
    Json(dto): Json<UpdatePeriodeDto>,
) -> Result<Json<Periode>, ApiError> {
    let item = periode::service::update(id, dto).await?;
    Ok(Json(item))
}

/// POST /api/gerants/:gid/periodes/generate
///
/// Rejouable : les couples (barque, année, mois) déjà couverts sont ignorés.
pub async fn generate(
    Path(_gerant_id): Path<i32>,
    Json(request): Json<GeneratePeriodesRequest>,
) -> Result<(StatusCode, Json<Vec<Periode>>), ApiError> {
    let created = periode::service::generate(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
