use thiserror::Error;

use crate::server::error::status::ErrorStatus;

#[derive(Error, Debug)]
pub enum SpaceError {
    #[error("Character type {0} is outside 1..=9")]
    InvalidCharacterType(i64),

    #[error("Room type {0} is outside 1..=4")]
    InvalidRoomType(i64),

    #[error("Member {0} has no space")]
    NotFound(i32),

    #[error("Member {0} already has a space")]
    AlreadyExists(i32),
}

impl SpaceError {
    pub fn status(&self) -> ErrorStatus {
        match self {
            Self::InvalidCharacterType(_) => ErrorStatus::InvalidCharacterType,
            Self::InvalidRoomType(_) => ErrorStatus::InvalidRoomType,
            Self::NotFound(_) => ErrorStatus::SpaceNotFound,
            Self::AlreadyExists(_) => ErrorStatus::SpaceAlreadyExists,
        }
    }
}
