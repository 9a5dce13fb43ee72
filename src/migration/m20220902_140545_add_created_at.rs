use sea_orm_migration::{prelude::*, schema::*};

use super::m20220901_000002_create_products::Products;

/// Rows that predate this column are backfilled with the Unix epoch.
pub const BACKFILL_CREATED_AT: &str = "1970-01-01T00:00:00+00:00";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Products::Table)
                    .add_column(
                        timestamp_with_time_zone(CreatedAt::CreatedAt).default(BACKFILL_CREATED_AT),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Products::Table)
                    .drop_column(CreatedAt::CreatedAt)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum CreatedAt {
    CreatedAt,
}
