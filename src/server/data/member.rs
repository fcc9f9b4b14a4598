//! Member data repository for database operations.
//!
//! This module provides the `MemberRepository` for looking up members by id or email
//! and inserting members created by an OAuth login.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::member::UpsertMemberParam;

/// Repository providing database operations for members.
pub struct MemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    /// Creates a new MemberRepository instance.
    ///
    /// # Arguments
    /// - `db` - Connection or open transaction to run queries on
    ///
    /// # Returns
    /// - `MemberRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new member.
    ///
    /// Fails with a unique constraint violation if a member with the same email was
    /// inserted concurrently; callers resolve that by re-reading with `find_by_email`.
    ///
    /// # Arguments
    /// - `param` - Email, provider, and display name of the new member
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted member
    /// - `Err(DbErr)` - Database error, including unique violations on `email`
    pub async fn create(&self, param: UpsertMemberParam) -> Result<entity::member::Model, DbErr> {
        let now = Utc::now();

        entity::member::ActiveModel {
            email: ActiveValue::Set(param.email),
            social: ActiveValue::Set(param.social.as_str().to_string()),
            name: ActiveValue::Set(param.name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a member by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Member exists
    /// - `Ok(None)` - No member with that id
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id(&self, member_id: i32) -> Result<Option<entity::member::Model>, DbErr> {
        entity::prelude::Member::find_by_id(member_id)
            .one(self.db)
            .await
    }

    /// Finds a member by their login email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::member::Model>, DbErr> {
        entity::prelude::Member::find()
            .filter(entity::member::Column::Email.eq(email))
            .one(self.db)
            .await
    }
}
