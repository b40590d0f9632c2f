//! Create `businesses` table with optional FK to `addresses`.
//!
//! `social_media` is free-form JSONB; `images` is a text array of storage paths.
use sea_orm_migration::{prelude::*, schema::*};

use crate::{stamp, text_array_null, uuid_pk};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Businesses::Table)
                    .if_not_exists()
                    .col(uuid_pk(Businesses::Id))
                    .col(string(Businesses::Name))
                    .col(string_null(Businesses::Phone))
                    .col(string_null(Businesses::Email))
                    .col(string_null(Businesses::Website))
                    .col(json_binary_null(Businesses::SocialMedia))
                    .col(uuid_null(Businesses::AddressId))
                    .col(text_null(Businesses::Description))
                    .col(string_null(Businesses::Logo))
                    .col(text_array_null(Businesses::Images))
                    .col(stamp(Businesses::CreatedAt))
                    .col(stamp(Businesses::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_businesses_address")
                            .from(Businesses::Table, Businesses::AddressId)
                            .to(Addresses::Table, Addresses::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Businesses::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Businesses {
    Table,
    Id,
    Name,
    Phone,
    Email,
    Website,
    SocialMedia,
    AddressId,
    Description,
    Logo,
    Images,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Addresses { Table, Id }
