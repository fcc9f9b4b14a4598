//! Space domain models and parameters.
//!
//! A space is the member's personal room: a character avatar, a room layout, a mood,
//! and optional music and status message, plus the images and plans shown inside it.
//! Each member owns at most one space.

use std::ops::RangeInclusive;

use crate::{
    model::space::{JoinSpaceDto, Mood, PlanDto, SpaceDto, SpaceImageDto},
    server::error::{internal::InternalError, space::SpaceError, AppError},
};

/// Valid character avatar values.
pub const CHARACTER_TYPE_RANGE: RangeInclusive<i64> = 1..=9;
/// Valid room layout values.
pub const ROOM_TYPE_RANGE: RangeInclusive<i64> = 1..=4;

/// Range-checks character and room type, character type first, and narrows both to
/// the column width.
///
/// # Returns
/// - `Ok((character_type, room_type))` - Both values within range
/// - `Err(SpaceError::InvalidCharacterType)` - Character type outside 1..=9
/// - `Err(SpaceError::InvalidRoomType)` - Room type outside 1..=4
pub fn check_types(character_type: i64, room_type: i64) -> Result<(i32, i32), SpaceError> {
    let character = Some(character_type)
        .filter(|value| CHARACTER_TYPE_RANGE.contains(value))
        .and_then(|value| i32::try_from(value).ok())
        .ok_or(SpaceError::InvalidCharacterType(character_type))?;
    let room = Some(room_type)
        .filter(|value| ROOM_TYPE_RANGE.contains(value))
        .and_then(|value| i32::try_from(value).ok())
        .ok_or(SpaceError::InvalidRoomType(room_type))?;

    Ok((character, room))
}

/// Value stored in the `space.mood` column.
pub fn mood_as_str(mood: Mood) -> &'static str {
    match mood {
        Mood::Happy => "HAPPY",
        Mood::Excited => "EXCITED",
        Mood::Calm => "CALM",
        Mood::Sad => "SAD",
        Mood::Angry => "ANGRY",
        Mood::Tired => "TIRED",
    }
}

/// Parses a stored `space.mood` value.
pub fn parse_mood(value: &str) -> Result<Mood, InternalError> {
    match value {
        "HAPPY" => Ok(Mood::Happy),
        "EXCITED" => Ok(Mood::Excited),
        "CALM" => Ok(Mood::Calm),
        "SAD" => Ok(Mood::Sad),
        "ANGRY" => Ok(Mood::Angry),
        "TIRED" => Ok(Mood::Tired),
        other => Err(InternalError::UnknownStoredValue {
            column: "space.mood",
            value: other.to_string(),
        }),
    }
}

/// A member's space with its images and plans.
#[derive(Debug, Clone, PartialEq)]
pub struct Space {
    pub id: i32,
    pub member_id: i32,
    pub nickname: String,
    pub character_type: i32,
    pub room_type: i32,
    pub mood: Mood,
    pub music_url: Option<String>,
    pub status_message: Option<String>,
    /// Images in insertion order.
    pub images: Vec<SpaceImage>,
    /// Plans in insertion order.
    pub plans: Vec<Plan>,
}

impl Space {
    /// Converts the space entity and its children to a domain model.
    ///
    /// # Arguments
    /// - `entity` - The space row
    /// - `images` - Space image rows belonging to the space
    /// - `plans` - Plan rows belonging to the space
    ///
    /// # Returns
    /// - `Ok(Space)` - Converted domain model
    /// - `Err(InternalError::UnknownStoredValue)` - Stored mood is unknown
    pub fn from_entity(
        entity: entity::space::Model,
        images: Vec<entity::space_image::Model>,
        plans: Vec<entity::plan::Model>,
    ) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            member_id: entity.member_id,
            nickname: entity.nickname,
            character_type: entity.character_type,
            room_type: entity.room_type,
            mood: parse_mood(&entity.mood)?,
            music_url: entity.music_url,
            status_message: entity.status_message,
            images: images.into_iter().map(SpaceImage::from_entity).collect(),
            plans: plans.into_iter().map(Plan::from_entity).collect(),
        })
    }

    pub fn into_dto(self) -> SpaceDto {
        SpaceDto {
            space_id: self.id,
            member_id: self.member_id,
            nickname: self.nickname,
            character_type: self.character_type,
            room_type: self.room_type,
            mood: self.mood,
            music_url: self.music_url,
            status_message: self.status_message,
            space_images: self.images.into_iter().map(SpaceImage::into_dto).collect(),
            plans: self.plans.into_iter().map(Plan::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpaceImage {
    pub id: i32,
    pub image_url: String,
}

impl SpaceImage {
    pub fn from_entity(entity: entity::space_image::Model) -> Self {
        Self {
            id: entity.id,
            image_url: entity.image_url,
        }
    }

    pub fn into_dto(self) -> SpaceImageDto {
        SpaceImageDto {
            space_image_id: self.id,
            image_url: self.image_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub id: i32,
    pub content: String,
    pub is_completed: bool,
}

impl Plan {
    pub fn from_entity(entity: entity::plan::Model) -> Self {
        Self {
            id: entity.id,
            content: entity.content,
            is_completed: entity.is_completed,
        }
    }

    pub fn into_dto(self) -> PlanDto {
        PlanDto {
            plan_id: self.id,
            content: self.content,
            is_completed: self.is_completed,
        }
    }
}

/// Parameters for creating a member's space.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinSpaceParams {
    pub nickname: String,
    pub character_type: i32,
    pub room_type: i32,
    pub mood: Mood,
    pub music_url: Option<String>,
    pub status_message: Option<String>,
}

impl JoinSpaceParams {
    /// Converts the request DTO, rejecting a blank nickname and out of range types.
    ///
    /// The DTO carries the types as `i64` so any JSON integer reaches the range check.
    ///
    /// # Returns
    /// - `Ok(JoinSpaceParams)` - Parameters ready for the space service
    /// - `Err(AppError::BadRequest)` - Nickname is empty or whitespace
    /// - `Err(AppError::SpaceErr(_))` - Character or room type out of range
    pub fn from_dto(dto: JoinSpaceDto) -> Result<Self, AppError> {
        let nickname = dto.nickname.trim().to_string();
        if nickname.is_empty() {
            return Err(AppError::BadRequest("nickname must not be empty".to_string()));
        }
        let (character_type, room_type) = check_types(dto.character_type, dto.room_type)?;

        Ok(Self {
            nickname,
            character_type,
            room_type,
            mood: dto.mood,
            music_url: dto.music_url.filter(|url| !url.trim().is_empty()),
            status_message: dto.status_message,
        })
    }

    /// Checks character and room type are within their allowed ranges.
    pub fn validate(&self) -> Result<(), SpaceError> {
        check_types(self.character_type.into(), self.room_type.into())?;

        Ok(())
    }
}
