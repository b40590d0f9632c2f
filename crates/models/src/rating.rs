use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::{booking, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ratings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Unique: a booking has at most one rating.
    #[sea_orm(unique)]
    pub booking_id: Uuid,
    #[sea_orm(column_type = "Decimal(Some((3, 2)))")]
    pub stars: Decimal,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Booking }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Booking => Entity::belongs_to(booking::Entity)
                .from(Column::BookingId)
                .to(booking::Column::Id)
                .into(),
        }
    }
}

impl Related<booking::Entity> for Entity {
    fn to() -> RelationDef { Relation::Booking.def() }
}

stamped_behavior!();

/// Rate a booking. A second rating for the same booking fails with
/// [`errors::ModelError::UniqueViolation`].
pub async fn create<C>(
    db: &C,
    booking_id: Uuid,
    stars: Decimal,
    description: Option<&str>,
) -> Result<Model, errors::ModelError>
where
    C: ConnectionTrait,
{
    let am = ActiveModel {
        booking_id: Set(booking_id),
        stars: Set(stars),
        description: Set(description.map(str::to_string)),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
