use serde::{Deserialize, Serialize};

/// Gérant complet, tel que renvoyé par `/api/gerants`.
///
/// Le mot de passe est stocké et renvoyé en clair par fidélité avec le
/// comportement historique de l'application. C'est un défaut connu, à
/// corriger avant toute mise en production (voir DESIGN.md).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gerant {
    pub id: i32,
    pub nom: String,
    pub prenom: String,
    pub cine: String,
    pub telephone: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Vue réduite d'un gérant, imbriquée dans les réponses barque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GerantResume {
    pub id: i32,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: String,
    pub role: String,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGerantDto {
    pub nom: String,
    pub prenom: String,
    pub cine: String,
    pub telephone: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateGerantDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prenom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Réponse de `GET /api/gerants/check-cine/:cine`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CineCheck {
    pub exists: bool,
}

/// Email sentinelle du gérant par défaut auquel sont rattachées les barques
/// importées sans gérant explicite. L'upsert sur cette clé est idempotent.
pub const DEFAULT_GERANT_EMAIL: &str = "admin@system.com";
