//! Alarm domain model.
//!
//! An alarm tells a member that someone shared their space with them.

use chrono::{DateTime, Utc};

use crate::model::alarm::AlarmDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Alarm {
    pub id: i32,
    /// Member the alarm is addressed to.
    pub member_id: i32,
    /// Space of the member who shared.
    pub space_id: i32,
    /// Nickname of the shared space.
    pub content: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Alarm {
    pub fn from_entity(entity: entity::alarm::Model) -> Self {
        Self {
            id: entity.id,
            member_id: entity.member_id,
            space_id: entity.space_id,
            content: entity.content,
            is_read: entity.is_read,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AlarmDto {
        AlarmDto {
            alarm_id: self.id,
            content: self.content,
            space_id: self.space_id,
            is_read: self.is_read,
            created_at: self.created_at,
        }
    }
}
