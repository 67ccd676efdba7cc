//! Validation de forme, purement locale et synchrone.
//!
//! Les contrôles d'unicité (CINE, email, immatriculation) passent par la
//! base et restent volontairement hors de ce module : les tests de forme
//! tournent sans réseau ni base de données.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod barque;
pub mod gerant;

/// Résultat d'une validation : carte champ → message. Un résultat non vide
/// bloque toujours la persistance de l'enregistrement qu'il décrit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    #[serde(rename = "isValid")]
    pub is_valid: bool,
    pub errors: BTreeMap<String, String>,
}

impl ValidationResult {
    pub fn from_errors(errors: BTreeMap<String, String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn valid() -> Self {
        Self::from_errors(BTreeMap::new())
    }
}

/// Erreur structurée pour les sites d'appel qui préfèrent un style
/// exception : `throw_if_invalid` convertit un résultat non valide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    pub message: String,
    pub code: String,
    pub errors: BTreeMap<String, String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: ", self.message)?;
        let mut first = true;
        for (field, msg) in &self.errors {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{field}: {msg}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

pub fn throw_if_invalid(result: ValidationResult) -> Result<(), ValidationError> {
    if result.is_valid {
        Ok(())
    } else {
        Err(ValidationError {
            message: "Validation failed".to_string(),
            code: "VALIDATION_ERROR".to_string(),
            errors: result.errors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throw_if_invalid_laisse_passer_un_resultat_valide() {
        assert!(throw_if_invalid(ValidationResult::valid()).is_ok());
    }

    #[test]
    fn throw_if_invalid_convertit_les_erreurs() {
        let mut errors = BTreeMap::new();
        errors.insert("nom".to_string(), "Le nom est requis".to_string());
        let err = throw_if_invalid(ValidationResult::from_errors(errors)).unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(err.errors.len(), 1);
    }
}
