//! Migrator registering one migration per table in foreign-key order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20251101_000001_create_addresses;
mod m20251101_000002_create_users;
mod m20251101_000003_create_businesses;
mod m20251101_000004_create_staff;
mod m20251101_000005_create_qualifications;
mod m20251101_000006_create_opening_hours;
mod m20251101_000007_create_service_categories;
mod m20251101_000008_create_services;
mod m20251101_000009_create_bookings;
mod m20251101_000010_create_booking_services;
mod m20251101_000011_create_ratings;
mod m20251101_000020_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_create_addresses::Migration),
            Box::new(m20251101_000002_create_users::Migration),
            Box::new(m20251101_000003_create_businesses::Migration),
            Box::new(m20251101_000004_create_staff::Migration),
            Box::new(m20251101_000005_create_qualifications::Migration),
            Box::new(m20251101_000006_create_opening_hours::Migration),
            Box::new(m20251101_000007_create_service_categories::Migration),
            Box::new(m20251101_000008_create_services::Migration),
            Box::new(m20251101_000009_create_bookings::Migration),
            Box::new(m20251101_000010_create_booking_services::Migration),
            Box::new(m20251101_000011_create_ratings::Migration),
            // Indexes should always be applied last
            Box::new(m20251101_000020_add_indexes::Migration),
        ]
    }
}

/// `id uuid PRIMARY KEY DEFAULT gen_random_uuid()`
pub(crate) fn uuid_pk<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .uuid()
        .not_null()
        .primary_key()
        .default(Expr::cust("gen_random_uuid()"))
        .to_owned()
}

/// `timestamptz NOT NULL DEFAULT now()`, used for `created_at` / `updated_at`.
pub(crate) fn stamp<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

/// Nullable `text[]`.
pub(crate) fn text_array_null<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .array(ColumnType::Text)
        .null()
        .to_owned()
}
