use chrono::Utc;
use contracts::domain::gerant::{CreateGerantDto, Gerant, GerantResume, UpdateGerantDto};
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "gerant")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nom: String,
    pub prenom: String,
    #[sea_orm(unique)]
    pub cine: String,
    pub telephone: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub created_at: chrono::DateTime<Utc>,
    pub updated_at: chrono::DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn to_domain(m: Model) -> Gerant {
    Gerant {
        id: m.id,
        nom: m.nom,
        prenom: m.prenom,
        cine: m.cine,
        telephone: m.telephone,
        email: m.email,
        password: m.password,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

/// Vue réduite imbriquée dans les réponses barque.
pub fn to_resume(m: Model) -> GerantResume {
    GerantResume {
        id: m.id,
        nom: m.nom,
        prenom: m.prenom,
        email: m.email,
        telephone: m.telephone,
        role: "GERANT".to_string(),
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Gerant>> {
    let rows = Entity::find()
        .order_by_asc(Column::Nom)
        .all(conn())
        .await?;
    Ok(rows.into_iter().map(to_domain).collect())
}

pub async fn find_by_id(id: i32) -> anyhow::Result<Option<Model>> {
    Ok(Entity::find_by_id(id).one(conn()).await?)
}

pub async fn find_by_email(email: &str) -> anyhow::Result<Option<Model>> {
    Ok(Entity::find()
        .filter(Column::Email.eq(email))
        .one(conn())
        .await?)
}

/// Existe-t-il un gérant portant ce CINE, hors `exclude_id` ?
/// `exclude_id` sert au chemin de mise à jour : le CINE inchangé d'un
/// enregistrement ne doit pas se signaler lui-même comme doublon.
pub async fn cine_exists(cine: &str, exclude_id: Option<i32>) -> anyhow::Result<bool> {
    let mut query = Entity::find().filter(Column::Cine.eq(cine));
    if let Some(id) = exclude_id {
        query = query.filter(Column::Id.ne(id));
    }
    Ok(query.count(conn()).await? > 0)
}

pub async fn insert(dto: &CreateGerantDto) -> Result<Model, DbErr> {
    let now = Utc::now();
    let active = ActiveModel {
        id: NotSet,
        nom: Set(dto.nom.trim().to_string()),
        prenom: Set(dto.prenom.trim().to_string()),
        cine: Set(dto.cine.trim().to_string()),
        telephone: Set(dto.telephone.trim().to_string()),
        email: Set(dto.email.trim().to_string()),
        password: Set(dto.password.clone()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn()).await
}

pub async fn update(id: i32, dto: &UpdateGerantDto) -> Result<Option<Model>, DbErr> {
    let Some(existing) = Entity::find_by_id(id).one(conn()).await? else {
        return Ok(None);
    };
    let mut active: ActiveModel = existing.into();
    if let Some(nom) = &dto.nom {
        active.nom = Set(nom.trim().to_string());
    }
    if let Some(prenom) = &dto.prenom {
        active.prenom = Set(prenom.trim().to_string());
    }
    if let Some(cine) = &dto.cine {
        active.cine = Set(cine.trim().to_string());
    }
    if let Some(telephone) = &dto.telephone {
        active.telephone = Set(telephone.trim().to_string());
    }
    if let Some(email) = &dto.email {
        active.email = Set(email.trim().to_string());
    }
    if let Some(password) = &dto.password {
        active.password = Set(password.clone());
    }
    active.updated_at = Set(Utc::now());
    active.update(conn()).await.map(Some)
}

pub async fn delete_by_id(id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
