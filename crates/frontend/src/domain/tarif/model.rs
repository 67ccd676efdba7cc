use contracts::domain::tarif::{CreateTarifDto, Tarif, UpdateTarifDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

pub async fn fetch_list(gerant_id: i32, actif: Option<bool>) -> Result<Vec<Tarif>, String> {
    let mut url = api_url(&format!("/api/gerants/{}/tarifs", gerant_id));
    if let Some(actif) = actif {
        url += &format!("?actif={}", actif);
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

pub async fn create(gerant_id: i32, dto: &CreateTarifDto) -> Result<Tarif, String> {
    let response = Request::post(&api_url(&format!("/api/gerants/{}/tarifs", gerant_id)))
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

pub async fn update(gerant_id: i32, id: i32, dto: &UpdateTarifDto) -> Result<Tarif, String> {
    let response = Request::put(&api_url(&format!(
        "/api/gerants/{}/tarifs/{}",
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

pub async fn delete(gerant_id: i32, id: i32) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!(
        "/api/gerants/{}/tarifs/{}",
        gerant_id, id
    )))
    .send()
    .await
    .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}
