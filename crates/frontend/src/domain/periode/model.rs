use contracts::domain::periode::{
    GeneratePeriodesRequest, Periode, PeriodeStatut, UpdatePeriodeDto,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

pub async fn fetch_list(
    gerant_id: i32,
    annee: Option<i32>,
    mois: Option<u32>,
    statut: Option<PeriodeStatut>,
) -> Result<Vec<Periode>, String> {
    let mut params = Vec::new();
    if let Some(annee) = annee {
        params.push(format!("annee={}", annee));
    }
    if let Some(mois) = mois {
        params.push(format!("mois={}", mois));
    }
    if let Some(statut) = statut {
        params.push(format!("statut={}", statut.as_str()));
    }
    let mut url = api_url(&format!("/api/gerants/{}/periodes", gerant_id));
    if !params.is_empty() {
        url += &format!("?{}", params.join("&"));
    }

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    response.json().await.map_err(|e| format!("{}", e))
}

pub async fn update(gerant_id: i32, id: i32, dto: &UpdatePeriodeDto) -> Result<Periode, String> {
    let response = Request::put(&api_url(&format!(
        "/api/gerants/{}/periodes/{}",
        gerant_id, id
    )))
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

/// Génération mensuelle : renvoie uniquement les périodes créées, les
/// couples déjà couverts sont ignorés côté serveur.
pub async fn generate(
    gerant_id: i32,
    request: &GeneratePeriodesRequest,
) -> Result<Vec<Periode>, String> {
    let response = Request::post(&api_url(&format!(
        "/api/gerants/{}/periodes/generate",
        gerant_id
    )))
    .json(request)
    .map_err(|e| format!("{}", e))?
    .send()
    .await
    .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    response.json().await.map_err(|e| format!("{}", e))
}
