//! Lecture côté client des fichiers Excel de barques.
//!
//! La résolution des colonnes et l'extraction des lignes sont des fonctions
//! pures, testables sans navigateur. Seul `import_file` touche au DOM.

use contracts::domain::barque::{BarqueStatut, CreateBarqueDto, ImportResult};

use super::model;
use crate::shared::excel_importer::read_excel_from_file;

/// Index des colonnes repérées dans la ligne d'en-tête.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportColumns {
    pub nom: usize,
    pub immatriculation: usize,
    pub port: usize,
    pub affiliation: usize,
}

/// Repère les colonnes attendues dans la ligne d'en-tête.
///
/// Affiliation et Immatriculation sont cherchées en égalité exacte
/// (insensible à la casse) ; le nom et le port en sous-chaîne ("nom",
/// "port"), première occurrence gagnante. Heuristique volontairement
/// laxiste : un en-tête "Nombre" capturerait la colonne nom.
pub fn resolve_columns(headers: &[String]) -> Result<ImportColumns, String> {
    let lower: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();

    let exact = |wanted: &str| lower.iter().position(|h| h == wanted);
    let contains = |wanted: &str| lower.iter().position(|h| h.contains(wanted));

    let nom = contains("nom");
    let immatriculation = exact("immatriculation");
    let port = contains("port");
    let affiliation = exact("affiliation");

    let mut missing = Vec::new();
    if nom.is_none() {
        missing.push("nom");
    }
    if immatriculation.is_none() {
        missing.push("immatriculation");
    }
    if port.is_none() {
        missing.push("port d'attache");
    }
    if affiliation.is_none() {
        missing.push("affiliation");
    }
    if !missing.is_empty() {
        return Err(format!("Colonnes introuvables : {}", missing.join(", ")));
    }

    Ok(ImportColumns {
        nom: nom.unwrap_or_default(),
        immatriculation: immatriculation.unwrap_or_default(),
        port: port.unwrap_or_default(),
        affiliation: affiliation.unwrap_or_default(),
    })
}

fn cell(row: &[String], idx: usize) -> String {
    row.get(idx).map(|c| c.trim().to_string()).unwrap_or_default()
}

/// Transforme les lignes de données en DTO de création.
///
/// Les lignes entièrement vides sont ignorées, de même que celles où il
/// manque le nom, l'immatriculation ou le port (abandon silencieux, conservé
/// tel quel). Le statut est `actif` par défaut à l'import.
pub fn extract_rows(data_rows: &[Vec<String>], cols: &ImportColumns) -> Vec<CreateBarqueDto> {
    let mut out = Vec::new();
    for row in data_rows {
        if row.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        let nom = cell(row, cols.nom);
        let immatriculation = cell(row, cols.immatriculation);
        let port_attache = cell(row, cols.port);
        if nom.is_empty() || immatriculation.is_empty() || port_attache.is_empty() {
            continue;
        }
        out.push(CreateBarqueDto {
            nom,
            immatriculation,
            port_attache,
            affiliation: cell(row, cols.affiliation),
            statut: Some(BarqueStatut::Actif),
            gerant_id: None,
        });
    }
    out
}

/// Lit la grille brute complète (en-tête comprise) et produit le lot à envoyer.
pub fn read_barques(grid: &[Vec<String>]) -> Result<Vec<CreateBarqueDto>, String> {
    let Some(headers) = grid.first() else {
        return Err("Le fichier est vide".to_string());
    };
    let cols = resolve_columns(headers)?;
    let barques = extract_rows(&grid[1..], &cols);
    if barques.is_empty() {
        return Err("Aucune ligne exploitable dans le fichier".to_string());
    }
    Ok(barques)
}

/// Chaîne complète : parsing du fichier, extraction, préparation du gérant
/// par défaut, envoi du lot.
pub async fn import_file(file: web_sys::File) -> Result<ImportResult, String> {
    let grid = read_excel_from_file(file).await?;
    let barques = read_barques(&grid)?;

    model::init_default_gerant().await?;
    model::bulk_import(&barques).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_resolve_columns_nominal() {
        let headers = row(&["Nom de la barque", "Immatriculation", "Port d'attache", "Affiliation"]);
        let cols = resolve_columns(&headers).unwrap();
        assert_eq!(
            cols,
            ImportColumns {
                nom: 0,
                immatriculation: 1,
                port: 2,
                affiliation: 3
            }
        );
    }

    #[test]
    fn test_resolve_columns_case_insensitive() {
        let headers = row(&["NOM", "IMMATRICULATION", "PORT", "AFFILIATION"]);
        assert!(resolve_columns(&headers).is_ok());
    }

    #[test]
    fn test_resolve_columns_missing_port_names_it() {
        let headers = row(&["Nom", "Immatriculation", "Affiliation"]);
        let err = resolve_columns(&headers).unwrap_err();
        assert!(err.contains("port d'attache"), "{err}");
        assert!(!err.contains("immatriculation"), "{err}");
    }

    #[test]
    fn test_resolve_columns_first_match_wins() {
        // Deux en-têtes contenant "nom" : le premier est retenu
        let headers = row(&["Nom", "Nombre", "Immatriculation", "Port", "Affiliation"]);
        let cols = resolve_columns(&headers).unwrap();
        assert_eq!(cols.nom, 0);
    }

    #[test]
    fn test_extract_rows_skips_blank_and_partial() {
        let cols = ImportColumns {
            nom: 0,
            immatriculation: 1,
            port: 2,
            affiliation: 3,
        };
        let rows = vec![
            row(&["Al Amal", "10/1-2023", "10/1", "Coop A"]),
            row(&["", "", "", ""]),
            // Immatriculation manquante : abandon silencieux
            row(&["Sans Immat", "", "10/1", "Coop A"]),
            row(&["El Bahr", "11/2-2024", "11/2", ""]),
        ];
        let out = extract_rows(&rows, &cols);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].nom, "Al Amal");
        assert_eq!(out[0].statut, Some(BarqueStatut::Actif));
        assert_eq!(out[1].affiliation, "");
    }

    #[test]
    fn test_read_barques_no_usable_rows() {
        let grid = vec![
            row(&["Nom", "Immatriculation", "Port", "Affiliation"]),
            row(&["", "", "", ""]),
        ];
        assert!(read_barques(&grid).is_err());
    }

    #[test]
    fn test_read_barques_trims_cells() {
        let grid = vec![
            row(&["Nom", "Immatriculation", "Port", "Affiliation"]),
            row(&["  Al Amal  ", " 10/1-2023 ", " 10/1 ", "  Coop A "]),
        ];
        let out = read_barques(&grid).unwrap();
        assert_eq!(out[0].nom, "Al Amal");
        assert_eq!(out[0].immatriculation, "10/1-2023");
        assert_eq!(out[0].port_attache, "10/1");
        assert_eq!(out[0].affiliation, "Coop A");
    }
}
