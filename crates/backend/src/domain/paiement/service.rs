use contracts::domain::paiement::{CreatePaiementDto, Paiement, PaiementSummary, PeriodeCle};
use contracts::domain::periode::PeriodeStatut;

use super::repository;
use crate::domain::periode;
use crate::shared::error::ApiError;

/// Paiements du gérant, via les périodes de ses barques.
pub async fn list(gerant_id: i32) -> Result<Vec<Paiement>, ApiError> {
    let periodes = periode::service::list(gerant_id, None, None, None).await?;
    let periode_ids: Vec<i32> = periodes.iter().map(|p| p.id).collect();
    repository::list_by_periodes(&periode_ids)
        .await
        .map_err(ApiError::Internal)
}

/// Enregistre un paiement et marque la période correspondante comme payée.
pub async fn create(dto: CreatePaiementDto) -> Result<Paiement, ApiError> {
    if dto.montant <= 0.0 {
        return Err(ApiError::BadRequest(
            "Le montant doit être strictement positif".to_string(),
        ));
    }
    let Some(_) = periode::repository::find_by_id(dto.periode_id)
        .await
        .map_err(ApiError::Internal)?
    else {
        return Err(ApiError::NotFound("Période non trouvée".to_string()));
    };

    let model = repository::insert(&dto).await.map_err(ApiError::Internal)?;
    periode::repository::set_statut(dto.periode_id, PeriodeStatut::Paye)
        .await
        .map_err(ApiError::Internal)?;
    Ok(repository::to_domain(model))
}

/// Agrégat mensuel : somme et nombre de paiements des périodes (année, mois)
/// des barques du gérant.
pub async fn summary(
    gerant_id: i32,
    annee: i32,
    mois: u32,
) -> Result<PaiementSummary, ApiError> {
    let periodes = periode::service::list(gerant_id, Some(annee), Some(mois), None).await?;
    let periode_ids: Vec<i32> = periodes.iter().map(|p| p.id).collect();
    let paiements = repository::list_by_periodes(&periode_ids)
        .await
        .map_err(ApiError::Internal)?;
    Ok(PaiementSummary {
        total_montant: paiements.iter().map(|p| p.montant).sum(),
        count: paiements.len(),
        periode: PeriodeCle { annee, mois },
    })
}
