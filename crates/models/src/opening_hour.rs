use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::business;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "opening_hours")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub business_id: Uuid,
    pub date: Date,
    pub start_time: Time,
    pub end_time: Time,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Business }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Business => Entity::belongs_to(business::Entity)
                .from(Column::BusinessId)
                .to(business::Column::Id)
                .into(),
        }
    }
}

impl Related<business::Entity> for Entity {
    fn to() -> RelationDef { Relation::Business.def() }
}

stamped_behavior!();
