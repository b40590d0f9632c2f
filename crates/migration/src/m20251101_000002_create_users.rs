//! Create `users` table with optional FK to `addresses`.
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
                    .table(Users::Table)
                    .if_not_exists()
                    .col(uuid_pk(Users::Id))
                    .col(string(Users::FirstName))
                    .col(string(Users::LastName))
                    .col(date_null(Users::DateOfBirth))
                    .col(string(Users::Email).unique_key())
                    .col(string_null(Users::Phone))
                    .col(string_null(Users::Avatar))
                    .col(uuid_null(Users::AddressId))
                    .col(stamp(Users::CreatedAt))
                    .col(stamp(Users::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_address")
                            .from(Users::Table, Users::AddressId)
                            .to(Addresses::Table, Addresses::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Users::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Users { Table, Id, FirstName, LastName, DateOfBirth, Email, Phone, Avatar, AddressId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Addresses { Table, Id }
