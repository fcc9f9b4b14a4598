use sea_orm_migration::{prelude::*, schema::*};

use super::m20260902_000005_create_profile_table::Profile;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProfileImage::Table)
                    .if_not_exists()
                    .col(pk_auto(ProfileImage::Id))
                    .col(integer_uniq(ProfileImage::ProfileId))
                    .col(string(ProfileImage::ProfileImageType))
                    .col(string_null(ProfileImage::ImageUrl))
                    .col(
                        timestamp_with_time_zone(ProfileImage::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(ProfileImage::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profile_image_profile_id")
                            .from(ProfileImage::Table, ProfileImage::ProfileId)
                            .to(Profile::Table, Profile::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProfileImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProfileImage {
    Table,
    Id,
    ProfileId,
    ProfileImageType,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}
