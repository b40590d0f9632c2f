//! Create `bookings` table with FKs to `users` and `businesses`.
//!
//! `booking_number` is a BIGSERIAL running number shown to customers; the
//! uuid stays the primary key.
use sea_orm_migration::{prelude::*, schema::*};

use crate::{stamp, uuid_pk};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(uuid_pk(Bookings::Id))
                    .col(
                        ColumnDef::new(Bookings::BookingNumber)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .unique_key(),
                    )
                    .col(timestamp_with_time_zone(Bookings::Time))
                    .col(uuid(Bookings::UserId))
                    .col(uuid(Bookings::BusinessId))
                    .col(stamp(Bookings::CreatedAt))
                    .col(stamp(Bookings::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_user")
                            .from(Bookings::Table, Bookings::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_business")
                            .from(Bookings::Table, Bookings::BusinessId)
                            .to(Businesses::Table, Businesses::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Bookings::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Bookings { Table, Id, BookingNumber, Time, UserId, BusinessId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Users { Table, Id }

#[derive(DeriveIden)]
enum Businesses { Table, Id }
