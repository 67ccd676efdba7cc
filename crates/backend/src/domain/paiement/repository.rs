use chrono::Utc;
use contracts::domain::paiement::{CreatePaiementDto, Paiement};
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "paiement")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub periode_id: i32,
    pub responsable_id: i32,
    pub montant: f64,
    pub date_paiement: chrono::DateTime<Utc>,
    pub created_at: chrono::DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn to_domain(m: Model) -> Paiement {
    Paiement {
        id: m.id,
        periode_id: m.periode_id,
        responsable_id: m.responsable_id,
        montant: m.montant,
        date_paiement: m.date_paiement,
        created_at: m.created_at,
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_by_periodes(periode_ids: &[i32]) -> anyhow::Result<Vec<Paiement>> {
    if periode_ids.is_empty() {
        return Ok(Vec::new());
    }
    let rows = Entity::find()
        .filter(Column::PeriodeId.is_in(periode_ids.iter().copied()))
        .order_by_desc(Column::DatePaiement)
        .all(conn())
        .await?;
    Ok(rows.into_iter().map(to_domain).collect())
}

pub async fn insert(dto: &CreatePaiementDto) -> anyhow::Result<Model> {
    let now = Utc::now();
    let active = ActiveModel {
        id: NotSet,
        periode_id: Set(dto.periode_id),
        responsable_id: Set(dto.responsable_id),
        montant: Set(dto.montant),
        date_paiement: Set(now),
        created_at: Set(now),
    };
    Ok(active.insert(conn()).await?)
}
