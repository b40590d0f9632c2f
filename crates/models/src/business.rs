use sea_orm::{entity::prelude::*, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::{address, booking, errors, opening_hour, service_category, staff};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "businesses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub social_media: Option<Json>,
    pub address_id: Option<Uuid>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub logo: Option<String>,
    pub images: Option<Vec<String>>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Address,
    OpeningHour,
    Booking,
    Staff,
    ServiceCategory,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Address => Entity::belongs_to(address::Entity)
                .from(Column::AddressId)
                .to(address::Column::Id)
                .into(),
            Relation::OpeningHour => Entity::has_many(opening_hour::Entity).into(),
            Relation::Booking => Entity::has_many(booking::Entity).into(),
            Relation::Staff => Entity::has_many(staff::Entity).into(),
            Relation::ServiceCategory => Entity::has_many(service_category::Entity).into(),
        }
    }
}

impl Related<address::Entity> for Entity {
    fn to() -> RelationDef { Relation::Address.def() }
}

impl Related<opening_hour::Entity> for Entity {
    fn to() -> RelationDef { Relation::OpeningHour.def() }
}

impl Related<booking::Entity> for Entity {
    fn to() -> RelationDef { Relation::Booking.def() }
}

impl Related<staff::Entity> for Entity {
    fn to() -> RelationDef { Relation::Staff.def() }
}

impl Related<service_category::Entity> for Entity {
    fn to() -> RelationDef { Relation::ServiceCategory.def() }
}

stamped_behavior!();

/// Business row joined with its address in a single `SELECT ... LEFT JOIN`.
pub async fn find_with_address(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<(Model, Option<address::Model>)>, errors::ModelError> {
    let found = Entity::find_by_id(id)
        .find_also_related(address::Entity)
        .one(db)
        .await?;
    Ok(found)
}
