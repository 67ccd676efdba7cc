//! Erreur applicative remontée par les services et traduite en réponse HTTP.
//!
//! Taxonomie : erreurs de validation (collectées, jamais levées pour les
//! opérations batch), introuvable (404), conflit d'unicité (message métier),
//! infrastructure (500, détails uniquement en build debug).

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(BTreeMap<String, String>),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sea_orm::DbErr> for ApiError {
    fn from(err: sea_orm::DbErr) -> Self {
        ApiError::Internal(err.into())
    }
}

impl From<contracts::validation::ValidationError> for ApiError {
    fn from(err: contracts::validation::ValidationError) -> Self {
        ApiError::Validation(err.errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::Validation(errors) => json!({
                "error": "Validation failed",
                "validationErrors": errors,
            }),
            ApiError::NotFound(message)
            | ApiError::Conflict(message)
            | ApiError::BadRequest(message) => json!({ "error": message }),
            ApiError::Internal(err) => {
                tracing::error!("internal error: {err:#}");
                if cfg!(debug_assertions) {
                    json!({ "error": "Internal server error", "details": err.to_string() })
                } else {
                    json!({ "error": "Internal server error" })
                }
            }
        };
        (status, Json(body)).into_response()
    }
}

/// Détecte une violation de contrainte UNIQUE SQLite pour la traduire en
/// message métier ("existe déjà") au lieu d'un 500.
pub fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    err.to_string().contains("UNIQUE constraint failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuts_http_par_variante() {
        assert_eq!(
            ApiError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Conflict("x".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Validation(BTreeMap::new()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn validation_echouee_remonte_en_400_avec_les_champs() {
        // Même enchaînement que les services : `throw_if_invalid(...)?`
        // convertit le ValidationError en ApiError::Validation.
        use contracts::domain::barque::CreateBarqueDto;
        use contracts::validation;
        use contracts::validation::barque::ValidationMode;

        let dto = CreateBarqueDto {
            nom: String::new(),
            immatriculation: "pas-bon".to_string(),
            port_attache: "12/3".to_string(),
            affiliation: "Coop".to_string(),
            statut: None,
            gerant_id: None,
        };
        let err: ApiError = validation::throw_if_invalid(validation::barque::validate_create(
            &dto,
            ValidationMode::Strict,
        ))
        .unwrap_err()
        .into();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        match err {
            ApiError::Validation(errors) => {
                assert!(errors.contains_key("nom"));
                assert!(errors.contains_key("immatriculation"));
            }
            other => panic!("variante inattendue : {other:?}"),
        }
    }
}
