use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mood {
    Happy,
    Excited,
    Calm,
    Sad,
    Angry,
    Tired,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct JoinSpaceDto {
    pub nickname: String,
    /// Character avatar, 1 to 9.
    pub character_type: i64,
    /// Room layout, 1 to 4.
    pub room_type: i64,
    pub mood: Mood,
    #[serde(default)]
    pub music_url: Option<String>,
    #[serde(default)]
    pub status_message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SpaceDto {
    pub space_id: i32,
    pub member_id: i32,
    pub nickname: String,
    pub character_type: i32,
    pub room_type: i32,
    pub mood: Mood,
    pub music_url: Option<String>,
    pub status_message: Option<String>,
    pub space_images: Vec<SpaceImageDto>,
    pub plans: Vec<PlanDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SpaceImageDto {
    pub space_image_id: i32,
    pub image_url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PlanDto {
    pub plan_id: i32,
    pub content: String,
    pub is_completed: bool,
}
