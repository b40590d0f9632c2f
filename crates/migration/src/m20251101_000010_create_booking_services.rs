//! Create `booking_services` association table (booking <-> service).
//!
//! Keyed by the (booking_id, service_id) pair; no surrogate id, no timestamps.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookingServices::Table)
                    .if_not_exists()
                    .col(uuid(BookingServices::BookingId))
                    .col(uuid(BookingServices::ServiceId))
                    .primary_key(
                        Index::create()
                            .name("pk_booking_services")
                            .col(BookingServices::BookingId)
                            .col(BookingServices::ServiceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_services_booking")
                            .from(BookingServices::Table, BookingServices::BookingId)
                            .to(Bookings::Table, Bookings::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_services_service")
                            .from(BookingServices::Table, BookingServices::ServiceId)
                            .to(Services::Table, Services::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(BookingServices::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum BookingServices { Table, BookingId, ServiceId }

#[derive(DeriveIden)]
enum Bookings { Table, Id }

#[derive(DeriveIden)]
enum Services { Table, Id }
