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
                    .table(SpaceImage::Table)
                    .if_not_exists()
                    .col(pk_auto(SpaceImage::Id))
                    .col(integer(SpaceImage::SpaceId))
                    .col(string(SpaceImage::ImageUrl))
                    .col(
                        timestamp_with_time_zone(SpaceImage::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(SpaceImage::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_space_image_space_id")
                            .from(SpaceImage::Table, SpaceImage::SpaceId)
                            .to(Space::Table, Space::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_space_image_space_id")
                    .table(SpaceImage::Table)
                    .col(SpaceImage::SpaceId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SpaceImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SpaceImage {
    Table,
    Id,
    SpaceId,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}
