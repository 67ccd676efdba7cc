use contracts::domain::barque::Barque;
use contracts::domain::gerant::{CreateGerantDto, Gerant, UpdateGerantDto, DEFAULT_GERANT_EMAIL};
use contracts::validation;

use super::repository;
use crate::domain::barque;
use crate::shared::error::{is_unique_violation, ApiError};

pub async fn list_all() -> Result<Vec<Gerant>, ApiError> {
    repository::list_all().await.map_err(ApiError::Internal)
}

pub async fn create(dto: CreateGerantDto) -> Result<Gerant, ApiError> {
    validation::throw_if_invalid(validation::gerant::validate_create(&dto))?;

    // L'unicité du CINE passe par une requête dédiée, distincte du contrôle
    // de forme : en création elle s'applique toujours.
    if repository::cine_exists(dto.cine.trim(), None)
        .await
        .map_err(ApiError::Internal)?
    {
        return Err(ApiError::Conflict(format!(
            "Un gérant avec le CINE {} existe déjà",
            dto.cine.trim()
        )));
    }

    match repository::insert(&dto).await {
        Ok(model) => Ok(repository::to_domain(model)),
        Err(err) if is_unique_violation(&err) => Err(ApiError::Conflict(format!(
            "Un gérant avec l'email {} existe déjà",
            dto.email.trim()
        ))),
        Err(err) => Err(ApiError::Internal(err.into())),
    }
}

pub async fn update(id: i32, dto: UpdateGerantDto) -> Result<Gerant, ApiError> {
    validation::throw_if_invalid(validation::gerant::validate_update(&dto))?;

    // Le contrôle d'unicité ne se déclenche que si le CINE soumis diffère de
    // la valeur stockée.
    if let Some(cine) = &dto.cine {
        let existing = repository::find_by_id(id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Gérant non trouvé".to_string()))?;
        if existing.cine != cine.trim()
            && repository::cine_exists(cine.trim(), Some(id))
                .await
                .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict(format!(
                "Un gérant avec le CINE {} existe déjà",
                cine.trim()
            )));
        }
    }

    match repository::update(id, &dto).await {
        Ok(Some(model)) => Ok(repository::to_domain(model)),
        Ok(None) => Err(ApiError::NotFound("Gérant non trouvé".to_string())),
        Err(err) if is_unique_violation(&err) => {
            Err(ApiError::Conflict("Un gérant avec ces identifiants existe déjà".to_string()))
        }
        Err(err) => Err(ApiError::Internal(err.into())),
    }
}

pub async fn delete(id: i32) -> Result<(), ApiError> {
    if repository::delete_by_id(id).await.map_err(ApiError::Internal)? {
        Ok(())
    } else {
        Err(ApiError::NotFound("Gérant non trouvé".to_string()))
    }
}

pub async fn check_cine(cine: &str, exclude_id: Option<i32>) -> Result<bool, ApiError> {
    repository::cine_exists(cine, exclude_id)
        .await
        .map_err(ApiError::Internal)
}

pub async fn barques_of(id: i32) -> Result<Vec<Barque>, ApiError> {
    if repository::find_by_id(id)
        .await
        .map_err(ApiError::Internal)?
        .is_none()
    {
        return Err(ApiError::NotFound("Gérant non trouvé".to_string()));
    }
    barque::repository::find_by_gerant(id)
        .await
        .map_err(ApiError::Internal)
}

/// Upsert idempotent du gérant sentinelle auquel sont rattachées les barques
/// importées sans gérant explicite. Clé : l'email `admin@system.com`.
pub async fn ensure_default_gerant() -> Result<Gerant, ApiError> {
    if let Some(existing) = repository::find_by_email(DEFAULT_GERANT_EMAIL)
        .await
        .map_err(ApiError::Internal)?
    {
        return Ok(repository::to_domain(existing));
    }

    let dto = CreateGerantDto {
        nom: "Admin".to_string(),
        prenom: "System".to_string(),
        cine: "DEFAULT001".to_string(),
        telephone: "0000000000".to_string(),
        email: DEFAULT_GERANT_EMAIL.to_string(),
        password: "defaultpassword".to_string(),
    };
    match repository::insert(&dto).await {
        Ok(model) => Ok(repository::to_domain(model)),
        // Deux imports simultanés peuvent tenter la création en même temps ;
        // le perdant relit la ligne gagnante.
        Err(err) if is_unique_violation(&err) => {
            let existing = repository::find_by_email(DEFAULT_GERANT_EMAIL)
                .await
                .map_err(ApiError::Internal)?
                .ok_or_else(|| {
                    ApiError::Internal(anyhow::anyhow!("default gerant vanished after conflict"))
                })?;
            Ok(repository::to_domain(existing))
        }
        Err(err) => Err(ApiError::Internal(err.into())),
    }
}
