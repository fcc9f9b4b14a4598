//! Storage of other members' profiles.
//!
//! A `member_profile` row records that a member added someone else's profile to
//! their storage. The pair (`member_id`, `profile_id`) is unique.

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct MemberProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberProfileRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records that `member_id` stored `profile_id` unless the pair is already stored.
    ///
    /// Concurrent identical inserts resolve on the unique (member, profile) index; the
    /// losing insert is skipped instead of failing.
    ///
    /// # Returns
    /// - `Ok(true)` - A new entry was stored
    /// - `Ok(false)` - The pair was already stored
    /// - `Err(DbErr)` - Database error
    pub async fn create_if_absent(&self, member_id: i32, profile_id: i32) -> Result<bool, DbErr> {
        let inserted = entity::prelude::MemberProfile::insert(entity::member_profile::ActiveModel {
            member_id: ActiveValue::Set(member_id),
            profile_id: ActiveValue::Set(profile_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::member_profile::Column::MemberId,
                entity::member_profile::Column::ProfileId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    /// Gets the member's stored entries in the order they were added.
    pub async fn find_by_member_id(
        &self,
        member_id: i32,
    ) -> Result<Vec<entity::member_profile::Model>, DbErr> {
        entity::prelude::MemberProfile::find()
            .filter(entity::member_profile::Column::MemberId.eq(member_id))
            .order_by_asc(entity::member_profile::Column::Id)
            .all(self.db)
            .await
    }

    /// Removes a profile from every member's storage.
    pub async fn delete_by_profile_id(&self, profile_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::MemberProfile::delete_many()
            .filter(entity::member_profile::Column::ProfileId.eq(profile_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
