use sea_orm::{DatabaseConnection, EntityTrait};

use models::user;
use crate::errors::ServiceError;

/// Every user, unfiltered and unpaginated.
pub async fn list_users(db: &DatabaseConnection) -> Result<Vec<user::Model>, ServiceError> {
    let rows = user::Entity::find().all(db).await?;
    Ok(rows)
}
