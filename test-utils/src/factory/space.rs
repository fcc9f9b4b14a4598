//! Space factory for creating spaces and their children.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test spaces with customizable fields.
///
/// Defaults:
/// - nickname: `"space{id}"`
/// - character_type: `1`, room_type: `1`
/// - mood: `"HAPPY"`
/// - music_url, status_message: `None`
pub struct SpaceFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: i32,
    nickname: String,
    character_type: i32,
    room_type: i32,
    mood: String,
}

impl<'a> SpaceFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, member_id: i32) -> Self {
        Self {
            db,
            member_id,
            nickname: format!("space{}", next_id()),
            character_type: 1,
            room_type: 1,
            mood: "HAPPY".to_string(),
        }
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    pub fn character_type(mut self, character_type: i32) -> Self {
        self.character_type = character_type;
        self
    }

    pub fn room_type(mut self, room_type: i32) -> Self {
        self.room_type = room_type;
        self
    }

    /// Sets the stored mood value, e.g. `"CALM"`.
    pub fn mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = mood.into();
        self
    }

    pub async fn build(self) -> Result<entity::space::Model, DbErr> {
        let now = Utc::now();
        entity::space::ActiveModel {
            member_id: ActiveValue::Set(self.member_id),
            nickname: ActiveValue::Set(self.nickname),
            character_type: ActiveValue::Set(self.character_type),
            room_type: ActiveValue::Set(self.room_type),
            mood: ActiveValue::Set(self.mood),
            music_url: ActiveValue::Set(None),
            status_message: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a space with default values for the member.
pub async fn create_space(
    db: &DatabaseConnection,
    member_id: i32,
) -> Result<entity::space::Model, DbErr> {
    SpaceFactory::new(db, member_id).build().await
}

/// Adds an image to a space.
pub async fn create_space_image(
    db: &DatabaseConnection,
    space_id: i32,
    image_url: impl Into<String>,
) -> Result<entity::space_image::Model, DbErr> {
    let now = Utc::now();
    entity::space_image::ActiveModel {
        space_id: ActiveValue::Set(space_id),
        image_url: ActiveValue::Set(image_url.into()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Adds an incomplete plan to a space.
pub async fn create_plan(
    db: &DatabaseConnection,
    space_id: i32,
    content: impl Into<String>,
) -> Result<entity::plan::Model, DbErr> {
    let now = Utc::now();
    entity::plan::ActiveModel {
        space_id: ActiveValue::Set(space_id),
        content: ActiveValue::Set(content.into()),
        is_completed: ActiveValue::Set(false),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an unread alarm for `member_id` pointing at `space_id`.
pub async fn create_alarm(
    db: &DatabaseConnection,
    member_id: i32,
    space_id: i32,
    content: impl Into<String>,
) -> Result<entity::alarm::Model, DbErr> {
    entity::alarm::ActiveModel {
        member_id: ActiveValue::Set(member_id),
        space_id: ActiveValue::Set(space_id),
        content: ActiveValue::Set(content.into()),
        is_read: ActiveValue::Set(false),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
