//! Create `services` table with FK to `service_categories`.
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
                    .table(Services::Table)
                    .if_not_exists()
                    .col(uuid_pk(Services::Id))
                    .col(string(Services::Name))
                    .col(integer(Services::DurationMins))
                    .col(integer(Services::Price))
                    .col(text_null(Services::Description))
                    .col(text_array_null(Services::Images))
                    .col(uuid(Services::ServiceCategoryId))
                    .col(stamp(Services::CreatedAt))
                    .col(stamp(Services::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_services_category")
                            .from(Services::Table, Services::ServiceCategoryId)
                            .to(ServiceCategories::Table, ServiceCategories::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Services::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Services {
    Table,
    Id,
    Name,
    DurationMins,
    Price,
    Description,
    Images,
    ServiceCategoryId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ServiceCategories { Table, Id }
