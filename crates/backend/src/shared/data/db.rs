use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

use crate::shared::config;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("database not initialized: call initialize_database first")
}

/// Ouvre la base SQLite et amorce le schéma (CREATE TABLE IF NOT EXISTS).
/// L'amorçage est idempotent, aucun runner de migration séparé.
pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let resolved;
    let db_file = match db_path {
        Some(p) => p.to_string(),
        None => {
            let cfg = config::load_config()?;
            resolved = config::get_database_path(&cfg)?;
            resolved.to_string_lossy().into_owned()
        }
    };

    if let Some(parent) = std::path::Path::new(&db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(&db_file).is_absolute() {
        std::path::PathBuf::from(&db_file)
    } else {
        std::env::current_dir()?.join(&db_file)
    };
    // Normalise les séparateurs pour une URL valide, y compris sous Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    bootstrap_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("database already initialized"))?;
    Ok(())
}

async fn execute(conn: &DatabaseConnection, sql: &str) -> anyhow::Result<()> {
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        sql.to_string(),
    ))
    .await?;
    Ok(())
}

async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    tracing::info!("Bootstrapping database schema");

    execute(
        conn,
        r#"
        CREATE TABLE IF NOT EXISTS gerant (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nom TEXT NOT NULL,
            prenom TEXT NOT NULL,
            cine TEXT NOT NULL UNIQUE,
            telephone TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
    "#,
    )
    .await?;

    execute(
        conn,
        r#"
        CREATE TABLE IF NOT EXISTS barque (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nom TEXT NOT NULL,
            immatriculation TEXT NOT NULL UNIQUE,
            port_attache TEXT NOT NULL,
            affiliation TEXT NOT NULL DEFAULT '',
            statut TEXT NOT NULL DEFAULT 'inactif',
            gerant_id INTEGER REFERENCES gerant(id),
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
    "#,
    )
    .await?;

    execute(
        conn,
        r#"
        CREATE TABLE IF NOT EXISTS responsable (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            gerant_id INTEGER NOT NULL REFERENCES gerant(id),
            nom TEXT NOT NULL,
            identifiant TEXT NOT NULL,
            actif INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL
        );
    "#,
    )
    .await?;

    execute(
        conn,
        r#"
        CREATE TABLE IF NOT EXISTS tarif (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            gerant_id INTEGER NOT NULL REFERENCES gerant(id),
            type TEXT NOT NULL,
            montant REAL NOT NULL,
            description TEXT NOT NULL,
            actif INTEGER NOT NULL DEFAULT 1,
            date_debut TEXT NOT NULL,
            date_fin TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
    "#,
    )
    .await?;

    execute(
        conn,
        r#"
        CREATE TABLE IF NOT EXISTS periode (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            barque_id INTEGER NOT NULL REFERENCES barque(id),
            annee INTEGER NOT NULL,
            mois INTEGER NOT NULL,
            montant REAL NOT NULL,
            statut TEXT NOT NULL DEFAULT 'En_Attente',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            UNIQUE(barque_id, annee, mois)
        );
    "#,
    )
    .await?;

    execute(
        conn,
        r#"
        CREATE TABLE IF NOT EXISTS paiement (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            periode_id INTEGER NOT NULL REFERENCES periode(id),
            responsable_id INTEGER NOT NULL REFERENCES responsable(id),
            montant REAL NOT NULL,
            date_paiement TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
    "#,
    )
    .await?;

    Ok(())
}
