use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ShareSpaceDto {
    pub to_member_id: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct AlarmDto {
    pub alarm_id: i32,
    /// Nickname of the space that was shared.
    pub content: String,
    pub space_id: i32,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct AlarmListDto {
    pub alarms: Vec<AlarmDto>,
}
