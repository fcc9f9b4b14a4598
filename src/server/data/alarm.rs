//! Alarm data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

/// Repository providing database operations for alarms.
pub struct AlarmRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AlarmRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an unread alarm.
    ///
    /// # Arguments
    /// - `member_id` - Member the alarm is addressed to
    /// - `space_id` - Space being shared
    /// - `content` - Text shown to the member, the shared space's nickname
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted alarm
    /// - `Err(DbErr)` - Database error
    pub async fn create(
        &self,
        member_id: i32,
        space_id: i32,
        content: String,
    ) -> Result<entity::alarm::Model, DbErr> {
        entity::alarm::ActiveModel {
            member_id: ActiveValue::Set(member_id),
            space_id: ActiveValue::Set(space_id),
            content: ActiveValue::Set(content),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all alarms addressed to a member in insertion order.
    pub async fn find_by_member_id(
        &self,
        member_id: i32,
    ) -> Result<Vec<entity::alarm::Model>, DbErr> {
        entity::prelude::Alarm::find()
            .filter(entity::alarm::Column::MemberId.eq(member_id))
            .order_by_asc(entity::alarm::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes every alarm pointing at a space, returning the number of rows removed.
    pub async fn delete_by_space_id(&self, space_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Alarm::delete_many()
            .filter(entity::alarm::Column::SpaceId.eq(space_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
