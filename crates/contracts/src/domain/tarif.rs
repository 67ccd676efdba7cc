use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TarifType {
    Mensuel,
    Trimestriel,
    Annuel,
}

impl TarifType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TarifType::Mensuel => "Mensuel",
            TarifType::Trimestriel => "Trimestriel",
            TarifType::Annuel => "Annuel",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Mensuel" => Some(TarifType::Mensuel),
            "Trimestriel" => Some(TarifType::Trimestriel),
            "Annuel" => Some(TarifType::Annuel),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tarif {
    pub id: i32,
    #[serde(rename = "type")]
    pub tarif_type: TarifType,
    pub montant: f64,
    pub description: String,
    pub actif: bool,
    pub date_debut: chrono::NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_fin: Option<chrono::NaiveDate>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTarifDto {
    #[serde(rename = "type")]
    pub tarif_type: TarifType,
    pub montant: f64,
    pub description: String,
    pub date_debut: chrono::NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_fin: Option<chrono::NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTarifDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub montant: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actif: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_fin: Option<chrono::NaiveDate>,
}
