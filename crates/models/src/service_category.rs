use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{business, service};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    /// Lowest price in the category, display only.
    pub price_from: Option<i32>,
    /// Free text such as "30–75 mins".
    pub duration_range: Option<String>,
    pub business_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Business,
    Service,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Business => Entity::belongs_to(business::Entity)
                .from(Column::BusinessId)
                .to(business::Column::Id)
                .into(),
            Relation::Service => Entity::has_many(service::Entity).into(),
        }
    }
}

impl Related<business::Entity> for Entity {
    fn to() -> RelationDef { Relation::Business.def() }
}

impl Related<service::Entity> for Entity {
    fn to() -> RelationDef { Relation::Service.def() }
}

stamped_behavior!();
