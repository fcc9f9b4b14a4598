//! Profile data repository for database operations.
//!
//! This module provides the `ProfileRepository` for profile rows: lookup by owner, by
//! owner and id for ownership checks, and by serial number for sharing. Features,
//! images, and storage associations live in their own repositories.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository providing database operations for profiles.
pub struct ProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileRepository<'a, C> {
    /// Creates a new ProfileRepository instance.
    ///
    /// # Arguments
    /// - `db` - Connection or open transaction to run queries on
    ///
    /// # Returns
    /// - `ProfileRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a profile.
    ///
    /// # Arguments
    /// - `member_id` - Owner of the profile
    /// - `serial_number` - Six digit number not used by any other profile
    /// - `name` - Profile name
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted profile
    /// - `Err(DbErr)` - Database error, including a unique violation on `serial_number`
    pub async fn create(
        &self,
        member_id: i32,
        serial_number: i32,
        name: String,
    ) -> Result<entity::profile::Model, DbErr> {
        let now = Utc::now();

        entity::profile::ActiveModel {
            member_id: ActiveValue::Set(member_id),
            serial_number: ActiveValue::Set(serial_number),
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a profile only if it belongs to the given member.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Profile exists and is owned by `member_id`
    /// - `Ok(None)` - Profile does not exist or belongs to someone else
    /// - `Err(DbErr)` - Database error
    pub async fn find_owned(
        &self,
        member_id: i32,
        profile_id: i32,
    ) -> Result<Option<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find_by_id(profile_id)
            .filter(entity::profile::Column::MemberId.eq(member_id))
            .one(self.db)
            .await
    }

    /// Gets all profiles owned by a member in creation order.
    pub async fn find_by_member_id(
        &self,
        member_id: i32,
    ) -> Result<Vec<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find()
            .filter(entity::profile::Column::MemberId.eq(member_id))
            .order_by_asc(entity::profile::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets profiles by id in id order. Missing ids are skipped.
    pub async fn find_by_ids(
        &self,
        profile_ids: Vec<i32>,
    ) -> Result<Vec<entity::profile::Model>, DbErr> {
        if profile_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Profile::find()
            .filter(entity::profile::Column::Id.is_in(profile_ids))
            .order_by_asc(entity::profile::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the profiles carrying any of the given serial numbers.
    ///
    /// Unknown serial numbers are skipped; callers compare the result against their
    /// input to detect them.
    pub async fn find_by_serial_numbers(
        &self,
        serial_numbers: Vec<i32>,
    ) -> Result<Vec<entity::profile::Model>, DbErr> {
        if serial_numbers.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Profile::find()
            .filter(entity::profile::Column::SerialNumber.is_in(serial_numbers))
            .order_by_asc(entity::profile::Column::Id)
            .all(self.db)
            .await
    }

    /// Counts the profiles owned by a member.
    pub async fn count_by_member_id(&self, member_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Profile::find()
            .filter(entity::profile::Column::MemberId.eq(member_id))
            .count(self.db)
            .await
    }

    /// Checks whether any profile already uses a serial number.
    pub async fn serial_number_exists(&self, serial_number: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Profile::find()
            .filter(entity::profile::Column::SerialNumber.eq(serial_number))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a profile row. Features, image, and storage rows must already be removed.
    pub async fn delete(&self, profile_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Profile::delete_by_id(profile_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
