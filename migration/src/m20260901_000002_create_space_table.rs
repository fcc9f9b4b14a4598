use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000001_create_member_table::Member;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Space::Table)
                    .if_not_exists()
                    .col(pk_auto(Space::Id))
                    .col(integer_uniq(Space::MemberId))
                    .col(string(Space::Nickname))
                    .col(integer(Space::CharacterType))
                    .col(integer(Space::RoomType))
                    .col(string(Space::Mood))
                    .col(string_null(Space::MusicUrl))
                    .col(string_null(Space::StatusMessage))
                    .col(
                        timestamp_with_time_zone(Space::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Space::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_space_member_id")
                            .from(Space::Table, Space::MemberId)
                            .to(Member::Table, Member::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Space::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Space {
    Table,
    Id,
    MemberId,
    Nickname,
    CharacterType,
    RoomType,
    Mood,
    MusicUrl,
    StatusMessage,
    CreatedAt,
    UpdatedAt,
}
