//! Create `staff` table with FK to `businesses`.
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
                    .table(Staff::Table)
                    .if_not_exists()
                    .col(uuid_pk(Staff::Id))
                    .col(string(Staff::FirstName))
                    .col(string(Staff::LastName))
                    .col(text_array_null(Staff::Position))
                    .col(text_null(Staff::Description))
                    .col(uuid(Staff::BusinessId))
                    .col(stamp(Staff::CreatedAt))
                    .col(stamp(Staff::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_staff_business")
                            .from(Staff::Table, Staff::BusinessId)
                            .to(Businesses::Table, Businesses::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Staff::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Staff { Table, Id, FirstName, LastName, Position, Description, BusinessId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Businesses { Table, Id }
