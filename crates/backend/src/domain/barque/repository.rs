use std::collections::HashSet;

use chrono::Utc;
use contracts::domain::barque::{Barque, BarqueStatut, CreateBarqueDto, UpdateBarqueDto};
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, NotSet, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};

use crate::domain::gerant;
use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "barque")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nom: String,
    #[sea_orm(unique)]
    pub immatriculation: String,
    pub port_attache: String,
    pub affiliation: String,
    pub statut: String,
    pub gerant_id: Option<i32>,
    pub created_at: chrono::DateTime<Utc>,
    pub updated_at: chrono::DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::domain::gerant::repository::Entity",
        from = "Column::GerantId",
        to = "crate::domain::gerant::repository::Column::Id"
    )]
    Gerant,
}

impl Related<gerant::repository::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gerant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convertit la ligne (et son gérant éventuel) vers le type d'API.
/// Un statut inconnu en base retombe sur `inactif`, comme l'original.
pub fn to_domain(model: Model, gerant: Option<gerant::repository::Model>) -> Barque {
    Barque {
        id: model.id,
        nom: model.nom,
        immatriculation: model.immatriculation,
        port_attache: model.port_attache,
        affiliation: model.affiliation,
        statut: BarqueStatut::parse(&model.statut).unwrap_or(BarqueStatut::Inactif),
        gerant: gerant.map(gerant::repository::to_resume),
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn search_condition(search: &str) -> Condition {
    Condition::any()
        .add(Column::Nom.contains(search))
        .add(Column::Immatriculation.contains(search))
        .add(Column::PortAttache.contains(search))
        .add(Column::Affiliation.contains(search))
}

/// Liste paginée triée par date de mise à jour décroissante, avec recherche
/// plein-champ sur nom, immatriculation, port et affiliation.
pub async fn list_paginated(
    page: u64,
    limit: u64,
    search: Option<&str>,
) -> anyhow::Result<(Vec<Barque>, u64)> {
    let mut query = Entity::find();
    let mut count_query = Entity::find();
    if let Some(s) = search.filter(|s| !s.trim().is_empty()) {
        let cond = search_condition(s.trim());
        query = query.filter(cond.clone());
        count_query = count_query.filter(cond);
    }

    let total = count_query.count(conn()).await?;
    let rows = query
        .find_also_related(gerant::repository::Entity)
        .order_by_desc(Column::UpdatedAt)
        .offset((page.saturating_sub(1)) * limit)
        .limit(limit)
        .all(conn())
        .await?;

    let items = rows
        .into_iter()
        .map(|(model, gerant)| to_domain(model, gerant))
        .collect();
    Ok((items, total))
}

pub async fn find_by_id(id: i32) -> anyhow::Result<Option<Barque>> {
    let row = Entity::find_by_id(id)
        .find_also_related(gerant::repository::Entity)
        .one(conn())
        .await?;
    Ok(row.map(|(model, gerant)| to_domain(model, gerant)))
}

pub async fn find_by_gerant(gerant_id: i32) -> anyhow::Result<Vec<Barque>> {
    let rows = Entity::find()
        .filter(Column::GerantId.eq(gerant_id))
        .order_by_desc(Column::UpdatedAt)
        .all(conn())
        .await?;
    Ok(rows.into_iter().map(|m| to_domain(m, None)).collect())
}

/// Immatriculations déjà en base parmi celles soumises, en une seule requête.
pub async fn existing_immatriculations(
    candidates: &[String],
) -> anyhow::Result<HashSet<String>> {
    if candidates.is_empty() {
        return Ok(HashSet::new());
    }
    let rows: Vec<String> = Entity::find()
        .filter(Column::Immatriculation.is_in(candidates.iter().cloned()))
        .select_only()
        .column(Column::Immatriculation)
        .into_tuple()
        .all(conn())
        .await?;
    Ok(rows.into_iter().collect())
}

fn active_from_create(
    dto: &CreateBarqueDto,
    statut: BarqueStatut,
    gerant_id: Option<i32>,
) -> ActiveModel {
    let now = Utc::now();
    ActiveModel {
        id: NotSet,
        nom: Set(dto.nom.trim().to_string()),
        immatriculation: Set(dto.immatriculation.trim().to_string()),
        port_attache: Set(dto.port_attache.trim().to_string()),
        affiliation: Set(dto.affiliation.trim().to_string()),
        statut: Set(statut.as_str().to_string()),
        gerant_id: Set(gerant_id),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

pub async fn insert(
    dto: &CreateBarqueDto,
    statut: BarqueStatut,
    gerant_id: Option<i32>,
) -> Result<Model, DbErr> {
    active_from_create(dto, statut, gerant_id).insert(conn()).await
}

/// Insertion sur une connexion arbitraire, pour l'import par lots qui
/// travaille dans une transaction par chunk.
pub async fn insert_on<C: ConnectionTrait>(
    db: &C,
    dto: &CreateBarqueDto,
    statut: BarqueStatut,
    gerant_id: Option<i32>,
) -> Result<Model, DbErr> {
    active_from_create(dto, statut, gerant_id).insert(db).await
}

pub async fn update(id: i32, dto: &UpdateBarqueDto) -> Result<Option<Model>, DbErr> {
    let Some(existing) = Entity::find_by_id(id).one(conn()).await? else {
        return Ok(None);
    };
    let mut active: ActiveModel = existing.into();
    if let Some(nom) = &dto.nom {
        active.nom = Set(nom.trim().to_string());
    }
    if let Some(immatriculation) = &dto.immatriculation {
        active.immatriculation = Set(immatriculation.trim().to_string());
    }
    if let Some(port) = &dto.port_attache {
        active.port_attache = Set(port.trim().to_string());
    }
    if let Some(affiliation) = &dto.affiliation {
        active.affiliation = Set(affiliation.trim().to_string());
    }
    if let Some(statut) = &dto.statut {
        active.statut = Set(statut.as_str().to_string());
    }
    if let Some(gerant_id) = dto.gerant_id {
        active.gerant_id = Set(Some(gerant_id));
    }
    active.updated_at = Set(Utc::now());
    active.update(conn()).await.map(Some)
}

pub async fn delete_by_id(id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
