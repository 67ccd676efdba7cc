use chrono::Utc;
use contracts::domain::periode::{Periode, PeriodeStatut, UpdatePeriodeDto};
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};

use crate::domain::barque;
use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "periode")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub barque_id: i32,
    pub annee: i32,
    pub mois: i32,
    pub montant: f64,
    pub statut: String,
    pub created_at: chrono::DateTime<Utc>,
    pub updated_at: chrono::DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn to_domain(m: Model) -> Periode {
    Periode {
        id: m.id,
        barque_id: m.barque_id,
        annee: m.annee,
        mois: m.mois.max(0) as u32,
        montant: m.montant,
        statut: PeriodeStatut::parse(&m.statut).unwrap_or(PeriodeStatut::EnAttente),
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Ids des barques d'un gérant ; les périodes sont rattachées aux barques,
/// pas au gérant, le périmètre se résout donc par jointure implicite.
async fn barque_ids_of_gerant(gerant_id: i32) -> anyhow::Result<Vec<i32>> {
    let ids: Vec<i32> = barque::repository::Entity::find()
        .filter(barque::repository::Column::GerantId.eq(gerant_id))
        .select_only()
        .column(barque::repository::Column::Id)
        .into_tuple()
        .all(conn())
        .await?;
    Ok(ids)
}

pub async fn list_by_gerant(
    gerant_id: i32,
    annee: Option<i32>,
    mois: Option<u32>,
    statut: Option<PeriodeStatut>,
) -> anyhow::Result<Vec<Periode>> {
    let barque_ids = barque_ids_of_gerant(gerant_id).await?;
    if barque_ids.is_empty() {
        return Ok(Vec::new());
    }
    let mut query = Entity::find().filter(Column::BarqueId.is_in(barque_ids));
    if let Some(annee) = annee {
        query = query.filter(Column::Annee.eq(annee));
    }
    if let Some(mois) = mois {
        query = query.filter(Column::Mois.eq(mois as i32));
    }
    if let Some(statut) = statut {
        query = query.filter(Column::Statut.eq(statut.as_str()));
    }
    let rows = query
        .order_by_desc(Column::Annee)
        .order_by_desc(Column::Mois)
        .all(conn())
        .await?;
    Ok(rows.into_iter().map(to_domain).collect())
}

pub async fn find_by_id(id: i32) -> anyhow::Result<Option<Model>> {
    Ok(Entity::find_by_id(id).one(conn()).await?)
}

pub async fn exists(barque_id: i32, annee: i32, mois: u32) -> anyhow::Result<bool> {
    let count = Entity::find()
        .filter(Column::BarqueId.eq(barque_id))
        .filter(Column::Annee.eq(annee))
        .filter(Column::Mois.eq(mois as i32))
        .count(conn())
        .await?;
    Ok(count > 0)
}

pub async fn insert(
    barque_id: i32,
    annee: i32,
    mois: u32,
    montant: f64,
) -> Result<Model, DbErr> {
    let now = Utc::now();
    let active = ActiveModel {
        id: NotSet,
        barque_id: Set(barque_id),
        annee: Set(annee),
        mois: Set(mois as i32),
        montant: Set(montant),
        statut: Set(PeriodeStatut::EnAttente.as_str().to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn()).await
}

pub async fn update(id: i32, dto: &UpdatePeriodeDto) -> anyhow::Result<Option<Model>> {
    let Some(existing) = find_by_id(id).await? else {
        return Ok(None);
    };
    let mut active: ActiveModel = existing.into();
    if let Some(montant) = dto.montant {
        active.montant = Set(montant);
    }
    if let Some(statut) = dto.statut {
        active.statut = Set(statut.as_str().to_string());
    }
    active.updated_at = Set(Utc::now());
    Ok(Some(active.update(conn()).await?))
}

pub async fn set_statut(id: i32, statut: PeriodeStatut) -> anyhow::Result<Option<Model>> {
    let Some(existing) = find_by_id(id).await? else {
        return Ok(None);
    };
    let mut active: ActiveModel = existing.into();
    active.statut = Set(statut.as_str().to_string());
    active.updated_at = Set(Utc::now());
    Ok(Some(active.update(conn()).await?))
}
