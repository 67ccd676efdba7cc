//! Import en masse de barques.
//!
//! Déroulé : validation de forme de tout le lot (régime import, relâché),
//! abandon avant toute écriture si une erreur existe ; détection des
//! doublons en une requête ; insertion des nouveaux enregistrements par
//! chunks de 100, une transaction par chunk. Un échec d'insertion n'arrête
//! pas le chunk : il est consigné et l'insertion continue. Le lot entier
//! n'est pas atomique : un arrêt en cours de route laisse les chunks déjà
//! committés en base.

use contracts::domain::barque::{BarqueStatut, CreateBarqueDto, ImportError, ImportResult};
use contracts::validation::barque::{IMMATRICULATION_IMPORT, PORT_IMPORT};
use sea_orm::TransactionTrait;

use super::repository;
use crate::domain::gerant;
use crate::shared::data::db::get_connection;
use crate::shared::error::ApiError;

const CHUNK_SIZE: usize = 100;

/// Validation de forme d'un lot complet. Chaque erreur porte le numéro de
/// ligne (base 1) de l'enregistrement fautif. Un enregistrement auquel il
/// manque un champ requis n'est pas contrôlé plus avant.
pub fn validate_batch(barques: &[CreateBarqueDto]) -> Vec<ImportError> {
    let mut errors = Vec::new();
    for (index, barque) in barques.iter().enumerate() {
        let line = index + 1;

        if barque.nom.trim().is_empty()
            || barque.immatriculation.trim().is_empty()
            || barque.port_attache.trim().is_empty()
        {
            errors.push(ImportError {
                message: "Missing required fields".to_string(),
                immatriculation: Some(barque.immatriculation.clone()),
                line: Some(line),
                field: None,
                code: None,
            });
            continue;
        }

        if !IMMATRICULATION_IMPORT.is_match(barque.immatriculation.trim()) {
            errors.push(ImportError {
                message: "Invalid immatriculation format (should be X/X, X/XX, XX/X, or XX/XX followed by optional -XXXX)"
                    .to_string(),
                immatriculation: Some(barque.immatriculation.clone()),
                line: Some(line),
                field: Some("immatriculation".to_string()),
                code: None,
            });
        }

        if !PORT_IMPORT.is_match(barque.port_attache.trim()) {
            errors.push(ImportError {
                message: "Invalid port format (should be X/X, X/XX, XX/X, or XX/XX)".to_string(),
                immatriculation: Some(barque.immatriculation.clone()),
                line: Some(line),
                field: Some("portAttache".to_string()),
                code: None,
            });
        }
    }
    errors
}

/// Sépare le lot entre nouveaux enregistrements et doublons d'après les
/// immatriculations déjà en base. Les doublons deviennent des `skipped`,
/// jamais des erreurs.
pub fn partition_existing(
    barques: Vec<CreateBarqueDto>,
    existing: &std::collections::HashSet<String>,
) -> (Vec<CreateBarqueDto>, usize) {
    let total = barques.len();
    let new_barques: Vec<CreateBarqueDto> = barques
        .into_iter()
        .filter(|b| !existing.contains(b.immatriculation.trim()))
        .collect();
    let skipped = total - new_barques.len();
    (new_barques, skipped)
}

pub async fn bulk_import(barques: Vec<CreateBarqueDto>) -> Result<ImportResult, ApiError> {
    let total = barques.len();
    tracing::info!("Starting bulk import of {total} barques");

    // Le gérant par défaut doit exister avant toute insertion : les barques
    // importées sans gérant explicite lui sont rattachées.
    let default_gerant = gerant::service::ensure_default_gerant().await?;

    let validation_errors = validate_batch(&barques);
    if !validation_errors.is_empty() {
        tracing::warn!(
            "Bulk import validation failed: {} error(s), no rows written",
            validation_errors.len()
        );
        return Ok(ImportResult {
            success: false,
            total,
            imported: 0,
            skipped: 0,
            errors: validation_errors,
            warnings: Vec::new(),
            error: Some("Validation failed for some barques".to_string()),
        });
    }

    let candidates: Vec<String> = barques
        .iter()
        .map(|b| b.immatriculation.trim().to_string())
        .collect();
    let existing = repository::existing_immatriculations(&candidates)
        .await
        .map_err(ApiError::Internal)?;
    let (new_barques, skipped) = partition_existing(barques, &existing);
    tracing::info!(
        "Bulk import: {} new, {} duplicate(s) skipped",
        new_barques.len(),
        skipped
    );

    let mut errors: Vec<ImportError> = Vec::new();
    let mut imported = 0usize;

    for chunk in new_barques.chunks(CHUNK_SIZE) {
        let txn = get_connection().begin().await.map_err(anyhow::Error::from)?;
        for barque in chunk {
            let statut = barque.statut.unwrap_or(BarqueStatut::Actif);
            let gerant_id = barque.gerant_id.unwrap_or(default_gerant.id);
            match repository::insert_on(&txn, barque, statut, Some(gerant_id)).await {
                // `imported` ne compte que les insertions confirmées. Une
                // collision d'unicité à l'insertion (course avec un import
                // concurrent) est une erreur, pas un skip.
                Ok(_) => imported += 1,
                Err(err) => {
                    tracing::error!(
                        "Failed to create barque {}: {err}",
                        barque.immatriculation
                    );
                    errors.push(ImportError {
                        message: format!("Failed to create barque: {err}"),
                        immatriculation: Some(barque.immatriculation.clone()),
                        line: None,
                        field: None,
                        code: None,
                    });
                }
            }
        }
        txn.commit().await.map_err(anyhow::Error::from)?;
    }

    let result = ImportResult {
        success: errors.is_empty(),
        total,
        imported,
        skipped,
        errors,
        warnings: Vec::new(),
        error: None,
    };
    tracing::info!(
        "Bulk import finished: {}/{} imported, {} skipped, {} error(s)",
        result.imported,
        result.total,
        result.skipped,
        result.errors.len()
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn dto(nom: &str, immatriculation: &str, port: &str) -> CreateBarqueDto {
        CreateBarqueDto {
            nom: nom.to_string(),
            immatriculation: immatriculation.to_string(),
            port_attache: port.to_string(),
            affiliation: "Pêche Côtière".to_string(),
            statut: Some(BarqueStatut::Actif),
            gerant_id: None,
        }
    }

    #[test]
    fn lot_valide_sans_erreur() {
        let batch = vec![dto("Ma Barque", "12/3-4567", "12/3"), dto("Autre", "12/4", "10/42")];
        assert!(validate_batch(&batch).is_empty());
    }

    #[test]
    fn champ_requis_manquant_court_circuite_les_formats() {
        let batch = vec![dto("", "pas-bon", "pas-bon")];
        let errors = validate_batch(&batch);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Missing required fields");
        assert_eq!(errors[0].line, Some(1));
    }

    #[test]
    fn formats_invalides_cumulent_les_erreurs() {
        let batch = vec![dto("Ma Barque", "123/456", "9999")];
        let errors = validate_batch(&batch);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field.as_deref(), Some("immatriculation"));
        assert_eq!(errors[1].field.as_deref(), Some("portAttache"));
    }

    #[test]
    fn les_numeros_de_ligne_partent_de_1() {
        let batch = vec![
            dto("Bonne", "12/3-4567", "12/3"),
            dto("Mauvaise", "xxx", "12/3"),
        ];
        let errors = validate_batch(&batch);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line, Some(2));
    }

    #[test]
    fn cle_json_absente_devient_erreur_de_ligne_pas_un_rejet() {
        // Même chemin que le handler : un tableau JSON dont une ligne omet
        // une clé requise doit se désérialiser, puis ressortir en erreur
        // "Missing required fields" sur cette ligne (200 + success:false,
        // jamais un 400 de parsing).
        let body = serde_json::json!([
            {"nom": "Bonne", "immatriculation": "12/3-4567", "portAttache": "12/3"},
            {"immatriculation": "12/4", "portAttache": "10/1", "affiliation": "Coop"}
        ]);
        let batch: Vec<CreateBarqueDto> = serde_json::from_value(body).unwrap();
        let errors = validate_batch(&batch);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Missing required fields");
        assert_eq!(errors[0].line, Some(2));
    }

    #[test]
    fn partition_compte_exactement_les_doublons() {
        let batch = vec![
            dto("A", "10/1-0001", "10/1"),
            dto("B", "10/1-0002", "10/1"),
            dto("C", "10/1-0003", "10/1"),
        ];
        let existing: HashSet<String> =
            ["10/1-0001".to_string(), "10/1-0003".to_string()].into();
        let (new_barques, skipped) = partition_existing(batch, &existing);
        assert_eq!(skipped, 2);
        assert_eq!(new_barques.len(), 1);
        assert_eq!(new_barques[0].immatriculation, "10/1-0002");
    }

    #[test]
    fn partition_sans_doublon_ne_saute_rien() {
        let batch = vec![dto("A", "10/1-0001", "10/1")];
        let (new_barques, skipped) = partition_existing(batch, &HashSet::new());
        assert_eq!(skipped, 0);
        assert_eq!(new_barques.len(), 1);
    }
}
