//! Règles de forme des gérants. L'unicité du CINE et de l'email se vérifie
//! côté serveur via `GET /api/gerants/check-cine/:cine`, jamais ici.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::gerant::{CreateGerantDto, UpdateGerantDto};
use crate::validation::ValidationResult;

/// Carte d'identité nationale : une ou deux lettres majuscules puis cinq ou
/// six chiffres.
pub static CINE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{1,2}[0-9]{5,6}$").unwrap());

pub static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

/// Mobile marocain : +212 ou 0, puis un préfixe 5/6/7 et huit chiffres.
pub static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\+212|0)[5-7][0-9]{8}$").unwrap());

fn check_nom(value: &str, field: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some(match field {
            "prenom" => "Le prénom est requis".to_string(),
            _ => "Le nom est requis".to_string(),
        });
    }
    let len = value.chars().count();
    if (2..=50).contains(&len) {
        None
    } else {
        Some(match field {
            "prenom" => "Le prénom doit contenir entre 2 et 50 caractères".to_string(),
            _ => "Le nom doit contenir entre 2 et 50 caractères".to_string(),
        })
    }
}

pub fn check_cine(value: &str) -> Option<String> {
    if CINE_REGEX.is_match(value) {
        None
    } else {
        Some("Le format du CINE n'est pas valide".to_string())
    }
}

fn check_telephone(value: &str) -> Option<String> {
    if PHONE_REGEX.is_match(value) {
        None
    } else {
        Some("Le format du numéro de téléphone n'est pas valide".to_string())
    }
}

fn check_email(value: &str) -> Option<String> {
    if EMAIL_REGEX.is_match(value) {
        None
    } else {
        Some("L'adresse email n'est pas valide".to_string())
    }
}

/// Au moins 8 caractères, une lettre et un chiffre. Écrit en fonction plutôt
/// qu'en expression régulière : le crate `regex` ne supporte pas les
/// lookaheads de la règle d'origine.
pub fn check_password(value: &str) -> Option<String> {
    let long_enough = value.chars().count() >= 8;
    let has_letter = value.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    if long_enough && has_letter && has_digit {
        None
    } else {
        Some("Le mot de passe doit contenir au moins 8 caractères, une lettre et un chiffre".to_string())
    }
}

fn push(errors: &mut BTreeMap<String, String>, field: &str, error: Option<String>) {
    if let Some(message) = error {
        errors.insert(field.to_string(), message);
    }
}

pub fn validate_create(dto: &CreateGerantDto) -> ValidationResult {
    let mut errors = BTreeMap::new();
    push(&mut errors, "nom", check_nom(&dto.nom, "nom"));
    push(&mut errors, "prenom", check_nom(&dto.prenom, "prenom"));
    push(&mut errors, "cine", check_cine(&dto.cine));
    push(&mut errors, "telephone", check_telephone(&dto.telephone));
    push(&mut errors, "email", check_email(&dto.email));
    push(&mut errors, "password", check_password(&dto.password));
    ValidationResult::from_errors(errors)
}

pub fn validate_update(dto: &UpdateGerantDto) -> ValidationResult {
    let mut errors = BTreeMap::new();
    if let Some(nom) = &dto.nom {
        push(&mut errors, "nom", check_nom(nom, "nom"));
    }
    if let Some(prenom) = &dto.prenom {
        push(&mut errors, "prenom", check_nom(prenom, "prenom"));
    }
    if let Some(cine) = &dto.cine {
        push(&mut errors, "cine", check_cine(cine));
    }
    if let Some(telephone) = &dto.telephone {
        push(&mut errors, "telephone", check_telephone(telephone));
    }
    if let Some(email) = &dto.email {
        push(&mut errors, "email", check_email(email));
    }
    if let Some(password) = &dto.password {
        push(&mut errors, "password", check_password(password));
    }
    ValidationResult::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cine_sensible_a_la_casse() {
        assert!(check_cine("A12345").is_none());
        assert!(check_cine("AB123456").is_none());
        assert!(check_cine("a12345").is_some());
        assert!(check_cine("ABC12345").is_some());
        assert!(check_cine("A1234").is_some());
    }

    #[test]
    fn telephone_marocain() {
        assert!(check_telephone("0612345678").is_none());
        assert!(check_telephone("+212612345678").is_none());
        assert!(check_telephone("0412345678").is_some());
        assert!(check_telephone("061234567").is_some());
    }

    #[test]
    fn mot_de_passe_lettre_et_chiffre_obligatoires() {
        assert!(check_password("abcd1234").is_none());
        assert!(check_password("abcdefgh").is_some());
        assert!(check_password("12345678").is_some());
        assert!(check_password("ab1").is_some());
    }

    #[test]
    fn create_verifie_tous_les_champs() {
        let dto = CreateGerantDto {
            nom: "".to_string(),
            prenom: "A".to_string(),
            cine: "a12345".to_string(),
            telephone: "12".to_string(),
            email: "pas-un-email".to_string(),
            password: "court".to_string(),
        };
        let result = validate_create(&dto);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 6);
        assert_eq!(
            result.errors.get("nom").map(String::as_str),
            Some("Le nom est requis")
        );
    }

    #[test]
    fn update_partiel_ne_touche_que_les_champs_presents() {
        let dto = UpdateGerantDto {
            email: Some("gerant@example.com".to_string()),
            ..Default::default()
        };
        assert!(validate_update(&dto).is_valid);
    }
}
