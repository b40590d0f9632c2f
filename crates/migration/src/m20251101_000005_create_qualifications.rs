//! Create `qualifications` table with FK to `staff`.
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
                    .table(Qualifications::Table)
                    .if_not_exists()
                    .col(uuid_pk(Qualifications::Id))
                    .col(string(Qualifications::Name))
                    .col(string_null(Qualifications::Company))
                    .col(text_null(Qualifications::Description))
                    .col(string_null(Qualifications::CertificateId))
                    .col(text_array_null(Qualifications::CertificateImage))
                    .col(uuid(Qualifications::StaffId))
                    .col(stamp(Qualifications::CreatedAt))
                    .col(stamp(Qualifications::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_qualifications_staff")
                            .from(Qualifications::Table, Qualifications::StaffId)
                            .to(Staff::Table, Staff::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Qualifications::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Qualifications {
    Table,
    Id,
    Name,
    Company,
    Description,
    CertificateId,
    CertificateImage,
    StaffId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Staff { Table, Id }
