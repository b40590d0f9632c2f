use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder};
use serde::{Deserialize, Serialize};

use crate::{address, booking, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<Date>,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub address_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Address,
    Booking,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Address => Entity::belongs_to(address::Entity)
                .from(Column::AddressId)
                .to(address::Column::Id)
                .into(),
            Relation::Booking => Entity::has_many(booking::Entity).into(),
        }
    }
}

impl Related<address::Entity> for Entity {
    fn to() -> RelationDef { Relation::Address.def() }
}

impl Related<booking::Entity> for Entity {
    fn to() -> RelationDef { Relation::Booking.def() }
}

stamped_behavior!();

pub async fn find_by_email(db: &DatabaseConnection, email: &str) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find().filter(Column::Email.eq(email)).one(db).await?)
}

/// Bookings made by a user, oldest first.
pub async fn bookings_of(db: &DatabaseConnection, user_id: Uuid) -> Result<Vec<booking::Model>, errors::ModelError> {
    let found = booking::Entity::find()
        .filter(booking::Column::UserId.eq(user_id))
        .order_by_asc(booking::Column::BookingNumber)
        .all(db)
        .await?;
    Ok(found)
}
