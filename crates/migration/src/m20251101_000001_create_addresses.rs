//! Create `addresses` table.
//!
//! Shared by users and businesses; coordinates are NUMERIC(9,6).
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
                    .table(Addresses::Table)
                    .if_not_exists()
                    .col(uuid_pk(Addresses::Id))
                    .col(string(Addresses::StreetLine1))
                    .col(string_null(Addresses::StreetLine2))
                    .col(string_null(Addresses::Suburb))
                    .col(string_null(Addresses::City))
                    .col(string_null(Addresses::State))
                    .col(string_null(Addresses::Postcode))
                    .col(string_null(Addresses::Country))
                    .col(decimal_len_null(Addresses::Latitude, 9, 6))
                    .col(decimal_len_null(Addresses::Longitude, 9, 6))
                    .col(stamp(Addresses::CreatedAt))
                    .col(stamp(Addresses::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Addresses::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Addresses {
    Table,
    Id,
    #[sea_orm(iden = "street_line_1")]
    StreetLine1,
    #[sea_orm(iden = "street_line_2")]
    StreetLine2,
    Suburb,
    City,
    State,
    Postcode,
    Country,
    Latitude,
    Longitude,
    CreatedAt,
    UpdatedAt,
}
