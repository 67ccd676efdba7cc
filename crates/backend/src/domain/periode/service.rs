use contracts::domain::periode::{
    GeneratePeriodesRequest, Periode, PeriodeStatut, UpdatePeriodeDto,
};

use super::repository;
use crate::shared::error::{is_unique_violation, ApiError};

pub async fn list(
    gerant_id: i32,
    annee: Option<i32>,
    mois: Option<u32>,
    statut: Option<PeriodeStatut>,
) -> Result<Vec<Periode>, ApiError> {
    repository::list_by_gerant(gerant_id, annee, mois, statut)
        .await
        .map_err(ApiError::Internal)
}

pub async fn update(id: i32, dto: UpdatePeriodeDto) -> Result<Periode, ApiError> {
    if let Some(montant) = dto.montant {
        if montant < 0.0 {
            return Err(ApiError::BadRequest(
                "Le montant ne peut pas être négatif".to_string(),
            ));
        }
    }
    match repository::update(id, &dto).await.map_err(ApiError::Internal)? {
        Some(model) => Ok(repository::to_domain(model)),
        None => Err(ApiError::NotFound("Période non trouvée".to_string())),
    }
}

/// Génère une période En_Attente par barque listée pour le couple
/// (année, mois). Les couples déjà présents sont ignorés sans erreur, ce qui
/// rend l'opération rejouable.
pub async fn generate(request: GeneratePeriodesRequest) -> Result<Vec<Periode>, ApiError> {
    if !(1..=12).contains(&request.mois) {
        return Err(ApiError::BadRequest("Le mois doit être entre 1 et 12".to_string()));
    }

    let mut created = Vec::new();
    for barque_id in request.barque_ids {
        if repository::exists(barque_id, request.annee, request.mois)
            .await
            .map_err(ApiError::Internal)?
        {
            continue;
        }
        match repository::insert(barque_id, request.annee, request.mois, request.montant).await {
            Ok(model) => created.push(repository::to_domain(model)),
            // Course avec une autre génération : la contrainte UNIQUE fait
            // foi, le doublon est ignoré comme ci-dessus.
            Err(err) if is_unique_violation(&err) => continue,
            Err(err) => return Err(ApiError::Internal(err.into())),
        }
    }
    Ok(created)
}
