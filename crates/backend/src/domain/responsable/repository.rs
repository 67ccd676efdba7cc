use chrono::Utc;
use contracts::domain::responsable::{CreateResponsableDto, Responsable, UpdateResponsableDto};
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "responsable")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub gerant_id: i32,
    pub nom: String,
    pub identifiant: String,
    pub actif: bool,
    pub created_at: chrono::DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn to_domain(m: Model) -> Responsable {
    Responsable {
        id: m.id,
        gerant_id: m.gerant_id,
        nom: m.nom,
        identifiant: m.identifiant,
        actif: m.actif,
        created_at: m.created_at,
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_by_gerant(
    gerant_id: i32,
    actif: Option<bool>,
) -> anyhow::Result<Vec<Responsable>> {
    let mut query = Entity::find().filter(Column::GerantId.eq(gerant_id));
    if let Some(actif) = actif {
        query = query.filter(Column::Actif.eq(actif));
    }
    let rows = query.order_by_asc(Column::Nom).all(conn()).await?;
    Ok(rows.into_iter().map(to_domain).collect())
}

pub async fn find_by_id(gerant_id: i32, id: i32) -> anyhow::Result<Option<Model>> {
    Ok(Entity::find_by_id(id)
        .filter(Column::GerantId.eq(gerant_id))
        .one(conn())
        .await?)
}

pub async fn insert(gerant_id: i32, dto: &CreateResponsableDto) -> anyhow::Result<Model> {
    let active = ActiveModel {
        id: NotSet,
        gerant_id: Set(gerant_id),
        nom: Set(dto.nom.trim().to_string()),
        identifiant: Set(dto.identifiant.trim().to_string()),
        actif: Set(true),
        created_at: Set(Utc::now()),
    };
    Ok(active.insert(conn()).await?)
}

pub async fn update(
    gerant_id: i32,
    id: i32,
    dto: &UpdateResponsableDto,
) -> anyhow::Result<Option<Model>> {
    let Some(existing) = find_by_id(gerant_id, id).await? else {
        return Ok(None);
    };
    let mut active: ActiveModel = existing.into();
    if let Some(nom) = &dto.nom {
        active.nom = Set(nom.trim().to_string());
    }
    if let Some(actif) = dto.actif {
        active.actif = Set(actif);
    }
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
