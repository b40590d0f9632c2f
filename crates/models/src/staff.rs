use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{business, qualification};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "staff")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub position: Option<Vec<String>>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub business_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Business,
    Qualification,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Business => Entity::belongs_to(business::Entity)
                .from(Column::BusinessId)
                .to(business::Column::Id)
                .into(),
            Relation::Qualification => Entity::has_many(qualification::Entity).into(),
        }
    }
}

impl Related<business::Entity> for Entity {
    fn to() -> RelationDef { Relation::Business.def() }
}

impl Related<qualification::Entity> for Entity {
    fn to() -> RelationDef { Relation::Qualification.def() }
}

stamped_behavior!();
