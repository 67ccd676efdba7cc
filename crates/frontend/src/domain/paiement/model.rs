use contracts::domain::paiement::{CreatePaiementDto, Paiement, PaiementSummary};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

pub async fn fetch_list(gerant_id: i32) -> Result<Vec<Paiement>, String> {
    let response = Request::get(&api_url(&format!("/api/gerants/{}/paiements", gerant_id)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    response.json().await.map_err(|e| format!("{}", e))
}

/// Enregistre un paiement ; le serveur marque la période comme payée.
pub async fn create(gerant_id: i32, dto: &CreatePaiementDto) -> Result<Paiement, String> {
    let response = Request::post(&api_url(&format!("/api/gerants/{}/paiements", gerant_id)))
        .json(dto)
        .map_err(|e| format!("{}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    response.json().await.map_err(|e| format!("{}", e))
}

pub async fn fetch_summary(
    gerant_id: i32,
    annee: i32,
    mois: u32,
) -> Result<PaiementSummary, String> {
    let response = Request::get(&api_url(&format!(
        "/api/gerants/{}/paiements/summary?annee={}&mois={}",
        gerant_id, annee, mois
    )))
    .send()
    .await
    .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    response.json().await.map_err(|e| format!("{}", e))
}
