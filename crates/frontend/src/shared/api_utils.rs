//! Construction des URL d'API.
//!
//! En dev le frontend est servi par Trunk sur son propre port ; le backend
//! axum écoute toujours sur [`BACKEND_PORT`] du même hôte. Les URL sont donc
//! reconstruites à partir de la fenêtre courante au lieu d'être relatives.

/// Port d'écoute du backend (valeur par défaut de son `config.toml`).
pub const BACKEND_PORT: u16 = 3000;

/// Base `protocole//hôte:port` déduite de la fenêtre courante.
/// Chaîne vide hors navigateur (tests natifs).
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location.hostname().unwrap_or_else(|_| "localhost".to_string());
    format!("{protocol}//{hostname}:{BACKEND_PORT}")
}

/// Préfixe un chemin d'API (`/api/...`) par la base.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
