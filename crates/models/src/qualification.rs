use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::staff;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "qualifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub company: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub certificate_id: Option<String>,
    pub certificate_image: Option<Vec<String>>,
    pub staff_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Staff }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Staff => Entity::belongs_to(staff::Entity)
                .from(Column::StaffId)
                .to(staff::Column::Id)
                .into(),
        }
    }
}

impl Related<staff::Entity> for Entity {
    fn to() -> RelationDef { Relation::Staff.def() }
}

stamped_behavior!();
