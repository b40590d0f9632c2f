use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::{booking_service, business, errors, rating, service, user};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Running number assigned by the database sequence; leave unset on insert.
    #[sea_orm(unique)]
    pub booking_number: i64,
    pub time: DateTimeWithTimeZone,
    pub user_id: Uuid,
    pub business_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    Business,
    Rating,
    BookingService,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .into(),
            Relation::Business => Entity::belongs_to(business::Entity)
                .from(Column::BusinessId)
                .to(business::Column::Id)
                .into(),
            Relation::Rating => Entity::has_one(rating::Entity).into(),
            Relation::BookingService => Entity::has_many(booking_service::Entity).into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl Related<business::Entity> for Entity {
    fn to() -> RelationDef { Relation::Business.def() }
}

impl Related<rating::Entity> for Entity {
    fn to() -> RelationDef { Relation::Rating.def() }
}

impl Related<booking_service::Entity> for Entity {
    fn to() -> RelationDef { Relation::BookingService.def() }
}

// booking -> booking_services -> services
impl Related<service::Entity> for Entity {
    fn to() -> RelationDef {
        booking_service::Relation::Service.def()
    }

    fn via() -> Option<RelationDef> {
        Some(booking_service::Relation::Booking.def().rev())
    }
}

stamped_behavior!();

/// Insert a booking and one junction row per service id.
///
/// Not atomic by itself: pass a transaction when the booking and its
/// services must land together.
pub async fn create_with_services<C>(
    db: &C,
    user_id: Uuid,
    business_id: Uuid,
    time: DateTimeWithTimeZone,
    service_ids: &[Uuid],
) -> Result<Model, errors::ModelError>
where
    C: ConnectionTrait,
{
    let am = ActiveModel {
        time: Set(time),
        user_id: Set(user_id),
        business_id: Set(business_id),
        ..Default::default()
    };
    let created = am.insert(db).await?;

    if !service_ids.is_empty() {
        let links = service_ids.iter().map(|service_id| booking_service::ActiveModel {
            booking_id: Set(created.id),
            service_id: Set(*service_id),
        });
        booking_service::Entity::insert_many(links).exec(db).await?;
    }
    Ok(created)
}

/// Services attached to a booking through `booking_services`.
pub async fn services_of<C>(db: &C, booking: &Model) -> Result<Vec<service::Model>, errors::ModelError>
where
    C: ConnectionTrait,
{
    Ok(booking.find_related(service::Entity).all(db).await?)
}
