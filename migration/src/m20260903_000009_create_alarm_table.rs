use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000001_create_member_table::Member, m20260901_000002_create_space_table::Space,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alarm::Table)
                    .if_not_exists()
                    .col(pk_auto(Alarm::Id))
                    .col(integer(Alarm::MemberId))
                    .col(integer(Alarm::SpaceId))
                    .col(string(Alarm::Content))
                    .col(boolean(Alarm::IsRead).default(false))
                    .col(
                        timestamp_with_time_zone(Alarm::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_alarm_member_id")
                            .from(Alarm::Table, Alarm::MemberId)
                            .to(Member::Table, Member::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_alarm_space_id")
                            .from(Alarm::Table, Alarm::SpaceId)
                            .to(Space::Table, Space::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_alarm_member_id")
                    .table(Alarm::Table)
                    .col(Alarm::MemberId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alarm::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Alarm {
    Table,
    Id,
    MemberId,
    SpaceId,
    Content,
    IsRead,
    CreatedAt,
}
