use serde::Serialize;
use sea_orm::{DatabaseConnection, EntityTrait};
use uuid::Uuid;

use models::{address, business};
use crate::errors::ServiceError;

/// Business row with its address embedded, as served by the detail route.
#[derive(Debug, Clone, Serialize)]
pub struct BusinessDetail {
    #[serde(flatten)]
    pub business: business::Model,
    pub address: Option<address::Model>,
}

/// Every business, unfiltered and unpaginated.
pub async fn list_businesses(db: &DatabaseConnection) -> Result<Vec<business::Model>, ServiceError> {
    let rows = business::Entity::find().all(db).await?;
    Ok(rows)
}

/// Get a business by id; `None` when absent.
pub async fn get_business(db: &DatabaseConnection, id: Uuid) -> Result<Option<business::Model>, ServiceError> {
    let found = business::Entity::find_by_id(id).one(db).await?;
    Ok(found)
}

/// Get a business by id together with its address in one round trip.
pub async fn get_business_with_address(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<BusinessDetail>, ServiceError> {
    let found = business::find_with_address(db, id).await?;
    Ok(found.map(|(business, address)| BusinessDetail { business, address }))
}
