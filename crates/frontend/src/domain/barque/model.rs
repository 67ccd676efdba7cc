use contracts::domain::barque::{Barque, CreateBarqueDto, ImportResult, UpdateBarqueDto};
use contracts::shared::pagination::Paginated;
use gloo_net::http::Request;
use serde_json::json;

use crate::shared::api_utils::api_url;

pub async fn fetch_list(
    page: u64,
    limit: u64,
    search: &str,
) -> Result<Paginated<Barque>, String> {
    let mut url = api_url(&format!("/api/barques?page={}&limit={}", page, limit));
    if !search.trim().is_empty() {
        url += &format!("&search={}", urlencoding::encode(search.trim()));
    }

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Extrait le message d'erreur du corps JSON renvoyé par le backend.
async fn error_message(response: gloo_net::http::Response) -> String {
    let status = response.status();
    match response.json::<serde_json::Value>().await {
        Ok(body) => body
            .get("error")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("HTTP error: {}", status)),
        Err(_) => format!("HTTP error: {}", status),
    }
}

pub async fn create(dto: &CreateBarqueDto) -> Result<Barque, String> {
    let response = Request::post(&api_url("/api/barques"))
        .json(dto)
        .map_err(|e| format!("{}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    response.json().await.map_err(|e| format!("{}", e))
}

pub async fn update(id: i32, dto: &UpdateBarqueDto) -> Result<Barque, String> {
    let response = Request::put(&api_url(&format!("/api/barques/{}", id)))
        .json(dto)
        .map_err(|e| format!("{}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    response.json().await.map_err(|e| format!("{}", e))
}

pub async fn delete(id: i32) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/barques/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}

/// Prépare le gérant par défaut côté serveur, préalable à tout import en masse.
pub async fn init_default_gerant() -> Result<(), String> {
    let response = Request::post(&api_url("/api/barques/init-default-gerant"))
        .json(&json!({}))
        .map_err(|e| format!("{}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}

/// Envoie le lot au serveur. Un échec de validation revient en 200 avec
/// `success: false`, jamais en erreur HTTP.
pub async fn bulk_import(barques: &[CreateBarqueDto]) -> Result<ImportResult, String> {
    let response = Request::post(&api_url("/api/barques/bulk"))
        .json(&barques)
        .map_err(|e| format!("{}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    response.json().await.map_err(|e| format!("{}", e))
}
