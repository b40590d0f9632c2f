//! Create `opening_hours` table with FK to `businesses`.
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
                    .table(OpeningHours::Table)
                    .if_not_exists()
                    .col(uuid_pk(OpeningHours::Id))
                    .col(uuid(OpeningHours::BusinessId))
                    .col(date(OpeningHours::Date))
                    .col(time(OpeningHours::StartTime))
                    .col(time(OpeningHours::EndTime))
                    .col(stamp(OpeningHours::CreatedAt))
                    .col(stamp(OpeningHours::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_opening_hours_business")
                            .from(OpeningHours::Table, OpeningHours::BusinessId)
                            .to(Businesses::Table, Businesses::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(OpeningHours::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum OpeningHours { Table, Id, BusinessId, Date, StartTime, EndTime, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Businesses { Table, Id }
