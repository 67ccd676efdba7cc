use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers;

/// Configuration de toutes les routes de l'application.
///
/// Le segment paramétré après /api/gerants s'appelle partout `:gid` : le
/// routeur exige un nom unique par position dans l'arbre de correspondance.
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // BARQUES
        // ========================================
        .route(
            "/api/barques",
            get(handlers::barque::list).post(handlers::barque::create),
        )
        .route(
            "/api/barques/:id",
            put(handlers::barque::update).delete(handlers::barque::delete),
        )
        .route("/api/barques/bulk", post(handlers::barque::bulk_import))
        .route(
            "/api/barques/init-default-gerant",
            post(handlers::barque::init_default_gerant),
        )
        // ========================================
        // GERANTS
        // ========================================
        .route(
            "/api/gerants",
            get(handlers::gerant::list).post(handlers::gerant::create),
        )
        .route(
            "/api/gerants/:gid",
            put(handlers::gerant::update).delete(handlers::gerant::delete),
        )
        .route(
            "/api/gerants/check-cine/:cine",
            get(handlers::gerant::check_cine),
        )
        .route("/api/gerants/:gid/barques", get(handlers::gerant::barques))
        // ========================================
        // SOUS-RESSOURCES PAR GERANT
        // ========================================
        // Responsables
        .route(
            "/api/gerants/:gid/responsables",
            get(handlers::responsable::list).post(handlers::responsable::create),
        )
        .route(
            "/api/gerants/:gid/responsables/:id",
            put(handlers::responsable::update).delete(handlers::responsable::delete),
        )
        // Tarifs
        .route(
            "/api/gerants/:gid/tarifs",
            get(handlers::tarif::list).post(handlers::tarif::create),
        )
        .route(
            "/api/gerants/:gid/tarifs/:id",
            put(handlers::tarif::update).delete(handlers::tarif::delete),
        )
        // Périodes de facturation
        .route(
            "/api/gerants/:gid/periodes",
            get(handlers::periode::list),
        )
        .route(
            "/api/gerants/:gid/periodes/:id",
            put(handlers::periode::update),
        )
        .route(
            "/api/gerants/:gid/periodes/generate",
            post(handlers::periode::generate),
        )
        // Paiements
        .route(
            "/api/gerants/:gid/paiements",
            get(handlers::paiement::list).post(handlers::paiement::create),
        )
        .route(
            "/api/gerants/:gid/paiements/summary",
            get(handlers::paiement::summary),
        )
}
