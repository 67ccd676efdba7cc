use contracts::domain::barque::Barque;
use contracts::domain::gerant::{CineCheck, CreateGerantDto, Gerant, UpdateGerantDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

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

pub async fn fetch_list() -> Result<Vec<Gerant>, String> {
    let response = Request::get(&api_url("/api/gerants"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    response.json().await.map_err(|e| format!("{}", e))
}

pub async fn create(dto: &CreateGerantDto) -> Result<Gerant, String> {
    let response = Request::post(&api_url("/api/gerants"))
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

pub async fn update(id: i32, dto: &UpdateGerantDto) -> Result<Gerant, String> {
    let response = Request::put(&api_url(&format!("/api/gerants/{}", id)))
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
    let response = Request::delete(&api_url(&format!("/api/gerants/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}

/// Contrôle d'unicité distant du CINE, sensible à la casse côté serveur.
pub async fn check_cine(cine: &str, exclude_id: Option<i32>) -> Result<bool, String> {
    let mut url = api_url(&format!(
        "/api/gerants/check-cine/{}",
        urlencoding::encode(cine)
    ));
    if let Some(id) = exclude_id {
        url += &format!("?exclude_id={}", id);
    }
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    let check: CineCheck = response.json().await.map_err(|e| format!("{}", e))?;
    Ok(check.exists)
}

pub async fn fetch_barques(gerant_id: i32) -> Result<Vec<Barque>, String> {
    let response = Request::get(&api_url(&format!("/api/gerants/{}/barques", gerant_id)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    response.json().await.map_err(|e| format!("{}", e))
}
