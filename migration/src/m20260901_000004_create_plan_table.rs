use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000002_create_space_table::Space;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Plan::Table)
                    .if_not_exists()
                    .col(pk_auto(Plan::Id))
                    .col(integer(Plan::SpaceId))
                    .col(string(Plan::Content))
                    .col(boolean(Plan::IsCompleted).default(false))
                    .col(
                        timestamp_with_time_zone(Plan::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Plan::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plan_space_id")
                            .from(Plan::Table, Plan::SpaceId)
                            .to(Space::Table, Space::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_plan_space_id")
                    .table(Plan::Table)
                    .col(Plan::SpaceId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Plan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Plan {
    Table,
    Id,
    SpaceId,
    Content,
    IsCompleted,
    CreatedAt,
    UpdatedAt,
}
