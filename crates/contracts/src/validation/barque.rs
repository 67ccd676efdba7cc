//! Règles de forme des barques.
//!
//! Deux régimes coexistent volontairement : la saisie UI est plus stricte
//! que l'import de fichier. Une immatriculation saisie doit suivre
//! `XX/X-XXXX` ; une immatriculation importée tolère `X/X`, `XX/XX` et un
//! suffixe `-XXXX` optionnel. Même asymétrie pour le port d'attache.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::barque::{BarqueStatut, CreateBarqueDto, UpdateBarqueDto};
use crate::validation::ValidationResult;

/// Format strict de saisie : `10/1-5256`.
pub static IMMATRICULATION_STRICTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}/\d{1}-\d{4}$").unwrap());

/// Format toléré à l'import : `X/X`, `XX/XX`, suffixe `-XXXX` optionnel.
pub static IMMATRICULATION_IMPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}/\d{1,2}(-\d{4})?$").unwrap());

/// Format strict de saisie du port : `10/4`.
pub static PORT_STRICT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,2}/\d{1}$").unwrap());

/// Format toléré à l'import du port.
pub static PORT_IMPORT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,2}/\d{1,2}$").unwrap());

/// Régime de validation applicable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Saisie UI : formats stricts.
    Strict,
    /// Import de fichier : formats relâchés.
    Import,
}

fn check_immatriculation(value: &str, mode: ValidationMode) -> Option<String> {
    let regex: &Regex = match mode {
        ValidationMode::Strict => &IMMATRICULATION_STRICTE,
        ValidationMode::Import => &IMMATRICULATION_IMPORT,
    };
    if regex.is_match(value) {
        None
    } else {
        Some(match mode {
            ValidationMode::Strict => {
                "L'immatriculation doit être au format XX/X-XXXX (ex: 10/1-5256)".to_string()
            }
            ValidationMode::Import => {
                "Invalid immatriculation format (should be X/X, X/XX, XX/X, or XX/XX followed by optional -XXXX)"
                    .to_string()
            }
        })
    }
}

fn check_port(value: &str, mode: ValidationMode) -> Option<String> {
    match mode {
        ValidationMode::Strict => {
            if PORT_STRICT.is_match(value) {
                None
            } else {
                Some("Le port doit être au format XX/X (ex: 10/4)".to_string())
            }
        }
        ValidationMode::Import => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Some("Le port d'attache ne peut pas être vide".to_string())
            } else if PORT_IMPORT.is_match(trimmed) {
                None
            } else {
                Some("Invalid port format (should be X/X, X/XX, XX/X, or XX/XX)".to_string())
            }
        }
    }
}

fn check_nom(value: &str) -> Option<String> {
    let len = value.chars().count();
    if (2..=50).contains(&len) {
        None
    } else {
        Some("Le nom doit contenir entre 2 et 50 caractères".to_string())
    }
}

fn check_affiliation(value: &str) -> Option<String> {
    let len = value.chars().count();
    if (2..=100).contains(&len) {
        None
    } else {
        Some("L'affiliation doit contenir entre 2 et 100 caractères".to_string())
    }
}

fn push(errors: &mut BTreeMap<String, String>, field: &str, error: Option<String>) {
    if let Some(message) = error {
        errors.insert(field.to_string(), message);
    }
}

/// Valide un DTO de création complet.
pub fn validate_create(dto: &CreateBarqueDto, mode: ValidationMode) -> ValidationResult {
    let mut errors = BTreeMap::new();
    push(
        &mut errors,
        "immatriculation",
        check_immatriculation(&dto.immatriculation, mode),
    );
    push(&mut errors, "portAttache", check_port(&dto.port_attache, mode));
    push(&mut errors, "nom", check_nom(&dto.nom));
    push(&mut errors, "affiliation", check_affiliation(&dto.affiliation));
    ValidationResult::from_errors(errors)
}

/// Valide une mise à jour partielle : seuls les champs présents sont
/// contrôlés, les autres ne produisent jamais d'erreur.
pub fn validate_update(dto: &UpdateBarqueDto, mode: ValidationMode) -> ValidationResult {
    let mut errors = BTreeMap::new();
    if let Some(immatriculation) = &dto.immatriculation {
        push(
            &mut errors,
            "immatriculation",
            check_immatriculation(immatriculation, mode),
        );
    }
    if let Some(port) = &dto.port_attache {
        push(&mut errors, "portAttache", check_port(port, mode));
    }
    if let Some(nom) = &dto.nom {
        push(&mut errors, "nom", check_nom(nom));
    }
    if let Some(affiliation) = &dto.affiliation {
        push(&mut errors, "affiliation", check_affiliation(affiliation));
    }
    ValidationResult::from_errors(errors)
}

/// Vérifie qu'une chaîne désigne un statut connu.
pub fn check_statut(value: &str) -> Option<String> {
    if BarqueStatut::parse(value).is_some() {
        None
    } else {
        Some("Le statut n'est pas valide".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(nom: &str, immatriculation: &str, port: &str, affiliation: &str) -> CreateBarqueDto {
        CreateBarqueDto {
            nom: nom.to_string(),
            immatriculation: immatriculation.to_string(),
            port_attache: port.to_string(),
            affiliation: affiliation.to_string(),
            statut: Some(BarqueStatut::Actif),
            gerant_id: None,
        }
    }

    #[test]
    fn immatriculation_stricte_exige_le_suffixe() {
        assert!(IMMATRICULATION_STRICTE.is_match("12/3-4567"));
        assert!(IMMATRICULATION_STRICTE.is_match("1/3-4567"));
        assert!(!IMMATRICULATION_STRICTE.is_match("12/3"));
        assert!(!IMMATRICULATION_STRICTE.is_match("12/34-4567"));
    }

    #[test]
    fn immatriculation_import_tolere_le_suffixe_absent() {
        assert!(IMMATRICULATION_IMPORT.is_match("12/3"));
        assert!(IMMATRICULATION_IMPORT.is_match("12/34"));
        assert!(IMMATRICULATION_IMPORT.is_match("12/34-4567"));
        assert!(!IMMATRICULATION_IMPORT.is_match("123/4"));
        assert!(!IMMATRICULATION_IMPORT.is_match("12/345"));
    }

    #[test]
    fn port_strict_refuse_deux_chiffres_apres_la_barre() {
        assert!(PORT_STRICT.is_match("10/4"));
        assert!(!PORT_STRICT.is_match("10/42"));
        assert!(PORT_IMPORT.is_match("10/42"));
    }

    #[test]
    fn une_immatriculation_invalide_ne_touche_que_son_champ() {
        let result = validate_create(&dto("Ma Barque", "pas-bon", "10/4", "Pêche Côtière"), ValidationMode::Strict);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors.contains_key("immatriculation"));
    }

    #[test]
    fn le_regime_import_accepte_ce_que_le_strict_refuse() {
        let d = dto("Ma Barque", "12/3", "10/42", "Pêche Côtière");
        assert!(!validate_create(&d, ValidationMode::Strict).is_valid);
        assert!(validate_create(&d, ValidationMode::Import).is_valid);
    }

    #[test]
    fn port_vide_refuse_a_l_import() {
        let result = validate_create(&dto("Ma Barque", "12/3", "   ", "Pêche Côtière"), ValidationMode::Import);
        assert_eq!(
            result.errors.get("portAttache").map(String::as_str),
            Some("Le port d'attache ne peut pas être vide")
        );
    }

    #[test]
    fn bornes_de_longueur_nom_et_affiliation() {
        let result = validate_create(&dto("A", "12/3-4567", "10/4", "B"), ValidationMode::Strict);
        assert!(result.errors.contains_key("nom"));
        assert!(result.errors.contains_key("affiliation"));

        let long = "x".repeat(51);
        let result = validate_create(&dto(&long, "12/3-4567", "10/4", "OK"), ValidationMode::Strict);
        assert!(result.errors.contains_key("nom"));
    }

    #[test]
    fn update_partiel_ignore_les_champs_absents() {
        let dto = UpdateBarqueDto {
            statut: Some(BarqueStatut::Suspendu),
            ..Default::default()
        };
        assert!(validate_update(&dto, ValidationMode::Strict).is_valid);
    }

    #[test]
    fn statut_inconnu_detecte() {
        assert!(check_statut("actif").is_none());
        assert!(check_statut("naufrage").is_some());
    }
}
