use serde::{Deserialize, Serialize};

/// Responsable : superviseur rattaché à un gérant, affecté aux barques.
/// Les champs sont sérialisés en snake_case, comme le reste des
/// sous-ressources gérant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Responsable {
    pub id: i32,
    pub gerant_id: i32,
    pub nom: String,
    pub identifiant: String,
    pub actif: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResponsableDto {
    pub nom: String,
    pub identifiant: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateResponsableDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actif: Option<bool>,
}
