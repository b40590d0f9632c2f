//! Persistence layer: one SeaORM entity per table, the booking/service
//! junction entity, and the connection pool builder.
//!
//! Relations are declared as explicit foreign-key columns plus `Related`
//! impls and resolved at query time; models never hold references to each
//! other.

/// `ActiveModelBehavior` for entities with a uuid `id` and
/// `created_at` / `updated_at` stamps. Assigns a fresh id on insert when the
/// caller left it unset and refreshes `updated_at` on every save.
macro_rules! stamped_behavior {
    () => {
        #[async_trait::async_trait]
        impl ActiveModelBehavior for ActiveModel {
            async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
            where
                C: ConnectionTrait,
            {
                let now: DateTimeWithTimeZone = ::chrono::Utc::now().into();
                if insert {
                    if self.id.is_not_set() {
                        self.id = ::sea_orm::ActiveValue::Set(::uuid::Uuid::new_v4());
                    }
                    self.created_at = ::sea_orm::ActiveValue::Set(now);
                }
                self.updated_at = ::sea_orm::ActiveValue::Set(now);
                Ok(self)
            }
        }
    };
}

pub mod errors;
pub mod db;
pub mod address;
pub mod user;
pub mod business;
pub mod staff;
pub mod qualification;
pub mod opening_hour;
pub mod service_category;
pub mod service;
pub mod booking;
pub mod booking_service;
pub mod rating;

#[cfg(test)]
mod tests;
