use chrono::Utc;
use contracts::domain::tarif::{CreateTarifDto, Tarif, TarifType, UpdateTarifDto};
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tarif")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub gerant_id: i32,
    #[sea_orm(column_name = "type")]
    pub tarif_type: String,
    pub montant: f64,
    pub description: String,
    pub actif: bool,
    pub date_debut: chrono::NaiveDate,
    pub date_fin: Option<chrono::NaiveDate>,
    pub created_at: chrono::DateTime<Utc>,
    pub updated_at: chrono::DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Un type inconnu en base retombe sur `Mensuel` plutôt que d'invalider la
/// ligne entière.
pub fn to_domain(m: Model) -> Tarif {
    Tarif {
        id: m.id,
        tarif_type: TarifType::parse(&m.tarif_type).unwrap_or(TarifType::Mensuel),
        montant: m.montant,
        description: m.description,
        actif: m.actif,
        date_debut: m.date_debut,
        date_fin: m.date_fin,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_by_gerant(gerant_id: i32, actif: Option<bool>) -> anyhow::Result<Vec<Tarif>> {
    let mut query = Entity::find().filter(Column::GerantId.eq(gerant_id));
    if let Some(actif) = actif {
        query = query.filter(Column::Actif.eq(actif));
    }
    let rows = query.order_by_desc(Column::DateDebut).all(conn()).await?;
    Ok(rows.into_iter().map(to_domain).collect())
}

pub async fn find_by_id(gerant_id: i32, id: i32) -> anyhow::Result<Option<Model>> {
    Ok(Entity::find_by_id(id)
        .filter(Column::GerantId.eq(gerant_id))
        .one(conn())
        .await?)
}

pub async fn insert(gerant_id: i32, dto: &CreateTarifDto) -> anyhow::Result<Model> {
    let now = Utc::now();
    let active = ActiveModel {
        id: NotSet,
        gerant_id: Set(gerant_id),
        tarif_type: Set(dto.tarif_type.as_str().to_string()),
        montant: Set(dto.montant),
        description: Set(dto.description.trim().to_string()),
        actif: Set(true),
        date_debut: Set(dto.date_debut),
        date_fin: Set(dto.date_fin),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(active.insert(conn()).await?)
}

pub async fn update(
    gerant_id: i32,
    id: i32,
    dto: &UpdateTarifDto,
) -> anyhow::Result<Option<Model>> {
    let Some(existing) = find_by_id(gerant_id, id).await? else {
        return Ok(None);
    };
    let mut active: ActiveModel = existing.into();
    if let Some(montant) = dto.montant {
        active.montant = Set(montant);
    }
    if let Some(description) = &dto.description {
        active.description = Set(description.trim().to_string());
    }
    if let Some(actif) = dto.actif {
        active.actif = Set(actif);
    }
    if let Some(date_fin) = dto.date_fin {
        active.date_fin = Set(Some(date_fin));
    }
    active.updated_at = Set(Utc::now());
    Ok(Some(active.update(conn()).await?))
}

pub async fn delete(gerant_id: i32, id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_many()
        .filter(Column::Id.eq(id))
        .filter(Column::GerantId.eq(gerant_id))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}
