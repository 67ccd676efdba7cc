use contracts::domain::responsable::{CreateResponsableDto, Responsable, UpdateResponsableDto};

use super::repository;
use crate::shared::error::ApiError;

pub async fn list(gerant_id: i32, actif: Option<bool>) -> Result<Vec<Responsable>, ApiError> {
    repository::list_by_gerant(gerant_id, actif)
        .await
        .map_err(ApiError::Internal)
}

pub async fn create(gerant_id: i32, dto: CreateResponsableDto) -> Result<Responsable, ApiError> {
    if dto.nom.trim().is_empty() || dto.identifiant.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Le nom et l'identifiant sont requis".to_string(),
        ));
    }
    let model = repository::insert(gerant_id, &dto)
        .await
        .map_err(ApiError::Internal)?;
    Ok(repository::to_domain(model))
}

pub async fn update(
    gerant_id: i32,
    id: i32,
    dto: UpdateResponsableDto,
) -> Result<Responsable, ApiError> {
    match repository::update(gerant_id, id, &dto)
        .await
        .map_err(ApiError::Internal)?
    {
        Some(model) => Ok(repository::to_domain(model)),
        None => Err(ApiError::NotFound("Responsable non trouvé".to_string())),
    }
}

pub async fn delete(gerant_id: i32, id: i32) -> Result<(), ApiError> {
    if repository::delete(gerant_id, id)
        .await
        .map_err(ApiError::Internal)?
    {
        Ok(())
    } else {
        Err(ApiError::NotFound("Responsable non trouvé".to_string()))
    }
}
