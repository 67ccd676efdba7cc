use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paiement {
    pub id: i32,
    pub periode_id: i32,
    pub responsable_id: i32,
    pub montant: f64,
    pub date_paiement: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaiementDto {
    pub periode_id: i32,
    pub responsable_id: i32,
    pub montant: f64,
}

/// Agrégat mensuel des paiements d'un gérant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaiementSummary {
    pub total_montant: f64,
    pub count: usize,
    pub periode: PeriodeCle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodeCle {
    pub annee: i32,
    pub mois: u32,
}
