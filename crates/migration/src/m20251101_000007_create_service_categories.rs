//! Create `service_categories` table with FK to `businesses`.
//!
//! `price_from` and `duration_range` are display values, not derived.
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
                    .table(ServiceCategories::Table)
                    .if_not_exists()
                    .col(uuid_pk(ServiceCategories::Id))
                    .col(string(ServiceCategories::Name))
                    .col(text_null(ServiceCategories::Description))
                    .col(text_array_null(ServiceCategories::Images))
                    .col(integer_null(ServiceCategories::PriceFrom))
                    .col(string_null(ServiceCategories::DurationRange))
                    .col(uuid(ServiceCategories::BusinessId))
                    .col(stamp(ServiceCategories::CreatedAt))
                    .col(stamp(ServiceCategories::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_categories_business")
                            .from(ServiceCategories::Table, ServiceCategories::BusinessId)
                            .to(Businesses::Table, Businesses::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceCategories::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceCategories {
    Table,
    Id,
    Name,
    Description,
    Images,
    PriceFrom,
    DurationRange,
    BusinessId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Businesses { Table, Id }
