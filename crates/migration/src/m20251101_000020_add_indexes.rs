//! Foreign-key lookup indexes. Postgres does not index referencing columns on
//! its own; unique and primary keys already carry their own index.
use sea_orm_migration::prelude::*;

/// (index name, table, column)
const FK_INDEXES: &[(&str, &str, &str)] = &[
    ("idx_users_address", "users", "address_id"),
    ("idx_businesses_address", "businesses", "address_id"),
    ("idx_staff_business", "staff", "business_id"),
    ("idx_qualifications_staff", "qualifications", "staff_id"),
    ("idx_opening_hours_business", "opening_hours", "business_id"),
    ("idx_service_categories_business", "service_categories", "business_id"),
    ("idx_services_category", "services", "service_category_id"),
    ("idx_bookings_user", "bookings", "user_id"),
    ("idx_bookings_business", "bookings", "business_id"),
    ("idx_booking_services_service", "booking_services", "service_id"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, column) in FK_INDEXES {
            manager
                .create_index(
                    Index::create()
                        .name(*name)
                        .table(Alias::new(*table))
                        .col(Alias::new(*column))
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, _) in FK_INDEXES.iter().rev() {
            manager
                .drop_index(Index::drop().name(*name).table(Alias::new(*table)).to_owned())
                .await?;
        }
        Ok(())
    }
}
