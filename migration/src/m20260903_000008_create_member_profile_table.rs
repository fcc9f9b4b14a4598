use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000001_create_member_table::Member, m20260902_000005_create_profile_table::Profile,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MemberProfile::Table)
                    .if_not_exists()
                    .col(pk_auto(MemberProfile::Id))
                    .col(integer(MemberProfile::MemberId))
                    .col(integer(MemberProfile::ProfileId))
                    .col(
                        timestamp_with_time_zone(MemberProfile::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_profile_member_id")
                            .from(MemberProfile::Table, MemberProfile::MemberId)
                            .to(Member::Table, Member::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_profile_profile_id")
                            .from(MemberProfile::Table, MemberProfile::ProfileId)
                            .to(Profile::Table, Profile::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // One storage entry per member and profile
        manager
            .create_index(
                Index::create()
                    .name("idx_member_profile_unique")
                    .table(MemberProfile::Table)
                    .col(MemberProfile::MemberId)
                    .col(MemberProfile::ProfileId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_member_profile_unique")
                    .table(MemberProfile::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MemberProfile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MemberProfile {
    Table,
    Id,
    MemberId,
    ProfileId,
    CreatedAt,
}
