use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{booking, booking_service, service_category};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub duration_mins: i32,
    pub price: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub service_category_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    ServiceCategory,
    BookingService,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::ServiceCategory => Entity::belongs_to(service_category::Entity)
                .from(Column::ServiceCategoryId)
                .to(service_category::Column::Id)
                .into(),
            Relation::BookingService => Entity::has_many(booking_service::Entity).into(),
        }
    }
}

impl Related<service_category::Entity> for Entity {
    fn to() -> RelationDef { Relation::ServiceCategory.def() }
}

impl Related<booking_service::Entity> for Entity {
    fn to() -> RelationDef { Relation::BookingService.def() }
}

// service -> booking_services -> bookings
impl Related<booking::Entity> for Entity {
    fn to() -> RelationDef {
        booking_service::Relation::Booking.def()
    }

    fn via() -> Option<RelationDef> {
        Some(booking_service::Relation::Service.def().rev())
    }
}

stamped_behavior!();
