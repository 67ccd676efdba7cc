use serde::{Deserialize, Serialize};

/// Statut de paiement d'une période de facturation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodeStatut {
    #[serde(rename = "En_Attente")]
    EnAttente,
    Paye,
    #[serde(rename = "En_Retard")]
    EnRetard,
}

impl PeriodeStatut {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodeStatut::EnAttente => "En_Attente",
            PeriodeStatut::Paye => "Paye",
            PeriodeStatut::EnRetard => "En_Retard",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "En_Attente" => Some(PeriodeStatut::EnAttente),
            "Paye" => Some(PeriodeStatut::Paye),
            "En_Retard" => Some(PeriodeStatut::EnRetard),
            _ => None,
        }
    }
}

/// Période de facturation (année + mois) d'une barque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Periode {
    pub id: i32,
    pub barque_id: i32,
    pub annee: i32,
    pub mois: u32,
    pub montant: f64,
    pub statut: PeriodeStatut,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePeriodeDto {
    pub barque_id: i32,
    pub annee: i32,
    pub mois: u32,
    pub montant: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePeriodeDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub montant: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statut: Option<PeriodeStatut>,
}

/// Corps de `POST /api/gerants/:gid/periodes/generate` : crée une période
/// En_Attente par barque listée, en ignorant les couples (barque, année,
/// mois) déjà existants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePeriodesRequest {
    pub barque_ids: Vec<i32>,
    pub annee: i32,
    pub mois: u32,
    pub montant: f64,
}
