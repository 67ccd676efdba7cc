use contracts::domain::tarif::{CreateTarifDto, Tarif, UpdateTarifDto};

use super::repository;
use crate::shared::error::ApiError;

pub async fn list(gerant_id: i32, actif: Option<bool>) -> Result<Vec<Tarif>, ApiError> {
    repository::list_by_gerant(gerant_id, actif)
        .await
        .map_err(ApiError::Internal)
}

pub async fn create(gerant_id: i32, dto: CreateTarifDto) -> Result<Tarif, ApiError> {
    if dto.montant <= 0.0 {
        return Err(ApiError::BadRequest(
            "Le montant doit être strictement positif".to_string(),
        ));
    }
    if let Some(fin) = dto.date_fin {
        if fin < dto.date_debut {
            return Err(ApiError::BadRequest(
                "La date de fin doit être postérieure à la date de début".to_string(),
            ));
        }
    }
    let model = repository::insert(gerant_id, &dto)
        .await
        .map_err(ApiError::Internal)?;
    Ok(repository::to_domain(model))
}

pub async fn update(gerant_id: i32, id: i32, dto: UpdateTarifDto) -> Result<Tarif, ApiError> {
    if let Some(montant) = dto.montant {
        if montant <= 0.0 {
            return Err(ApiError::BadRequest(
                "Le montant doit être strictement positif".to_string(),
            ));
        }
    }
    match repository::update(gerant_id, id, &dto)
        .await
        .map_err(ApiError::Internal)?
    {
        Some(model) => Ok(repository::to_domain(model)),
        None => Err(ApiError::NotFound("Tarif non trouvé".to_string())),
    }
}

pub async fn delete(gerant_id: i32, id: i32) -> Result<(), ApiError> {
    if repository::delete(gerant_id, id)
        .await
        .map_err(ApiError::Internal)?
    {
        Ok(())
    } else {
        Err(ApiError::NotFound("Tarif non trouvé".to_string()))
    }
}
