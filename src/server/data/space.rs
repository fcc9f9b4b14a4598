//! Space data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::space::{mood_as_str, JoinSpaceParams};

/// Repository providing database operations for spaces.
///
/// A member owns at most one space; `member_id` carries a unique index.
pub struct SpaceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SpaceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a space for the member.
    ///
    /// # Arguments
    /// - `member_id` - Owner of the space
    /// - `params` - Validated space fields
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted space
    /// - `Err(DbErr)` - Database error, including a unique violation if the member
    ///   already has a space
    pub async fn create(
        &self,
        member_id: i32,
        params: JoinSpaceParams,
    ) -> Result<entity::space::Model, DbErr> {
        let now = Utc::now();

        entity::space::ActiveModel {
            member_id: ActiveValue::Set(member_id),
            nickname: ActiveValue::Set(params.nickname),
            character_type: ActiveValue::Set(params.character_type),
            room_type: ActiveValue::Set(params.room_type),
            mood: ActiveValue::Set(mood_as_str(params.mood).to_string()),
            music_url: ActiveValue::Set(params.music_url),
            status_message: ActiveValue::Set(params.status_message),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds the space owned by a member.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The member's space
    /// - `Ok(None)` - Member has not joined yet
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_member_id(
        &self,
        member_id: i32,
    ) -> Result<Option<entity::space::Model>, DbErr> {
        entity::prelude::Space::find()
            .filter(entity::space::Column::MemberId.eq(member_id))
            .one(self.db)
            .await
    }

    /// Deletes a space row. Children must already be removed.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 or 1)
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, space_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Space::delete_by_id(space_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
