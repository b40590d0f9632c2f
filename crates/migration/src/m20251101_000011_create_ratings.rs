//! Create `ratings` table with a unique FK to `bookings` (one rating per booking).
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
                    .table(Ratings::Table)
                    .if_not_exists()
                    .col(uuid_pk(Ratings::Id))
                    .col(uuid(Ratings::BookingId).unique_key())
                    .col(decimal_len(Ratings::Stars, 3, 2))
                    .col(text_null(Ratings::Description))
                    .col(stamp(Ratings::CreatedAt))
                    .col(stamp(Ratings::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ratings_booking")
                            .from(Ratings::Table, Ratings::BookingId)
                            .to(Bookings::Table, Bookings::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Ratings::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Ratings { Table, Id, BookingId, Stars, Description, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Bookings { Table, Id }
