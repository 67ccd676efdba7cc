use contracts::domain::barque::{Barque, BarqueStatut, CreateBarqueDto, UpdateBarqueDto};
use contracts::shared::pagination::Paginated;
use contracts::validation;
use contracts::validation::barque::ValidationMode;

use super::repository;
use crate::shared::error::{is_unique_violation, ApiError};

pub async fn list(
    page: u64,
    limit: u64,
    search: Option<&str>,
) -> Result<Paginated<Barque>, ApiError> {
    let (items, total) = repository::list_paginated(page, limit, search)
        .await
        .map_err(ApiError::Internal)?;
    Ok(Paginated::new(items, total, page, limit))
}

pub async fn create(dto: CreateBarqueDto) -> Result<Barque, ApiError> {
    // Saisie UI : régime strict.
    validation::throw_if_invalid(validation::barque::validate_create(
        &dto,
        ValidationMode::Strict,
    ))?;

    // Création unitaire : statut par défaut `inactif` (l'import, lui,
    // retombe sur `actif`).
    let statut = dto.statut.unwrap_or(BarqueStatut::Inactif);
    match repository::insert(&dto, statut, dto.gerant_id).await {
        Ok(model) => {
            let barque = repository::find_by_id(model.id)
                .await
                .map_err(ApiError::Internal)?
                .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("inserted row not found")))?;
            Ok(barque)
        }
        Err(err) if is_unique_violation(&err) => Err(ApiError::Conflict(format!(
            "Une barque avec l'immatriculation {} existe déjà",
            dto.immatriculation.trim()
        ))),
        Err(err) => Err(ApiError::Internal(err.into())),
    }
}

pub async fn update(id: i32, dto: UpdateBarqueDto) -> Result<Barque, ApiError> {
    validation::throw_if_invalid(validation::barque::validate_update(
        &dto,
        ValidationMode::Strict,
    ))?;

    match repository::update(id, &dto).await {
        Ok(Some(model)) => {
            let barque = repository::find_by_id(model.id)
                .await
                .map_err(ApiError::Internal)?
                .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("updated row not found")))?;
            Ok(barque)
        }
        Ok(None) => Err(ApiError::NotFound("Barque non trouvée".to_string())),
        Err(err) if is_unique_violation(&err) => {
            let immatriculation = dto.immatriculation.as_deref().unwrap_or_default().trim().to_string();
            Err(ApiError::Conflict(format!(
                "Une barque avec l'immatriculation {immatriculation} existe déjà"
            )))
        }
        Err(err) => Err(ApiError::Internal(err.into())),
    }
}

pub async fn delete(id: i32) -> Result<(), ApiError> {
    if repository::delete_by_id(id).await.map_err(ApiError::Internal)? {
        Ok(())
    } else {
        Err(ApiError::NotFound("Barque non trouvée".to_string()))
    }
}
