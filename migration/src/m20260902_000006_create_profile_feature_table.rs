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
                    .table(ProfileFeature::Table)
                    .if_not_exists()
                    .col(pk_auto(ProfileFeature::Id))
                    .col(integer(ProfileFeature::ProfileId))
                    .col(string(ProfileFeature::FeatureKey))
                    .col(string(ProfileFeature::FeatureValue))
                    .col(
                        timestamp_with_time_zone(ProfileFeature::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(ProfileFeature::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profile_feature_profile_id")
                            .from(ProfileFeature::Table, ProfileFeature::ProfileId)
                            .to(Profile::Table, Profile::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_profile_feature_profile_id")
                    .table(ProfileFeature::Table)
                    .col(ProfileFeature::ProfileId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProfileFeature::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProfileFeature {
    Table,
    Id,
    ProfileId,
    FeatureKey,
    FeatureValue,
    CreatedAt,
    UpdatedAt,
}
