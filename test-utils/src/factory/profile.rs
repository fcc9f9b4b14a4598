//! Profile factory for creating profiles and their children.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test profiles.
///
/// Defaults:
/// - serial_number: six digits derived from the id counter, unique per test run
/// - name: `"Profile {id}"`
///
/// Only the profile row is inserted. Use
/// `helpers::create_profile_with_children` for features and image as well.
pub struct ProfileFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: i32,
    serial_number: i32,
    name: String,
}

impl<'a> ProfileFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, member_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            member_id,
            serial_number: 100_000 + (id % 900_000) as i32,
            name: format!("Profile {}", id),
        }
    }

    pub fn serial_number(mut self, serial_number: i32) -> Self {
        self.serial_number = serial_number;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::profile::Model, DbErr> {
        let now = Utc::now();
        entity::profile::ActiveModel {
            member_id: ActiveValue::Set(self.member_id),
            serial_number: ActiveValue::Set(self.serial_number),
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a profile with default values for the member.
pub async fn create_profile(
    db: &DatabaseConnection,
    member_id: i32,
) -> Result<entity::profile::Model, DbErr> {
    ProfileFactory::new(db, member_id).build().await
}

/// Adds a feature to a profile.
pub async fn create_feature(
    db: &DatabaseConnection,
    profile_id: i32,
    key: impl Into<String>,
    value: impl Into<String>,
) -> Result<entity::profile_feature::Model, DbErr> {
    let now = Utc::now();
    entity::profile_feature::ActiveModel {
        profile_id: ActiveValue::Set(profile_id),
        feature_key: ActiveValue::Set(key.into()),
        feature_value: ActiveValue::Set(value.into()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Adds the `DEFAULT` image with no URL to a profile.
pub async fn create_default_image(
    db: &DatabaseConnection,
    profile_id: i32,
) -> Result<entity::profile_image::Model, DbErr> {
    let now = Utc::now();
    entity::profile_image::ActiveModel {
        profile_id: ActiveValue::Set(profile_id),
        profile_image_type: ActiveValue::Set("DEFAULT".to_string()),
        image_url: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Stores `profile_id` in the storage of `member_id`.
pub async fn create_storage_entry(
    db: &DatabaseConnection,
    member_id: i32,
    profile_id: i32,
) -> Result<entity::member_profile::Model, DbErr> {
    entity::member_profile::ActiveModel {
        member_id: ActiveValue::Set(member_id),
        profile_id: ActiveValue::Set(profile_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
