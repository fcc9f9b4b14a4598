//! Catalog of error codes returned to clients.
//!
//! Every failure maps to exactly one `ErrorStatus`, which fixes the HTTP status, the
//! `<DOMAIN><STATUS>` code, and the message placed in the error envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::model::api::ErrorDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStatus {
    InternalServerError,
    BadRequest,
    Unauthorized,
    Forbidden,

    InvalidCharacterType,
    InvalidRoomType,
    SpaceNotFound,
    SpaceAlreadyExists,

    ProfileSizeOverflow,
    ProfileImageRequired,
    ProfileNotFound,
    FeatureNotFound,

    MemberNotFound,
}

impl ErrorStatus {
    pub fn http_status(self) -> StatusCode {
        match self {
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest
            | Self::InvalidCharacterType
            | Self::InvalidRoomType
            | Self::ProfileSizeOverflow
            | Self::ProfileImageRequired => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::SpaceNotFound
            | Self::ProfileNotFound
            | Self::FeatureNotFound
            | Self::MemberNotFound => StatusCode::NOT_FOUND,
            Self::SpaceAlreadyExists => StatusCode::CONFLICT,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::InternalServerError => "COMMON500",
            Self::BadRequest => "COMMON400",
            Self::Unauthorized => "COMMON401",
            Self::Forbidden => "COMMON403",
            Self::InvalidCharacterType => "SPACE400",
            Self::InvalidRoomType => "SPACE401",
            Self::SpaceNotFound => "SPACE404",
            Self::SpaceAlreadyExists => "SPACE409",
            Self::ProfileSizeOverflow => "PROFILE400",
            Self::ProfileImageRequired => "PROFILE401",
            Self::ProfileNotFound => "PROFILE404",
            Self::FeatureNotFound => "FEATURE404",
            Self::MemberNotFound => "MEMBER400",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::InternalServerError => "Server error, please contact an administrator.",
            Self::BadRequest => "Invalid request.",
            Self::Unauthorized => "Authentication is required.",
            Self::Forbidden => "This request is forbidden.",
            Self::InvalidCharacterType => "Character type must be a number from 1 to 9.",
            Self::InvalidRoomType => "Room type must be a number from 1 to 4.",
            Self::SpaceNotFound => "The space does not exist.",
            Self::SpaceAlreadyExists => "This member already has a space.",
            Self::ProfileSizeOverflow => "No more profiles can be created.",
            Self::ProfileImageRequired => "An image file is required for this profile image type.",
            Self::ProfileNotFound => "The profile does not exist.",
            Self::FeatureNotFound => "The profile feature does not exist.",
            Self::MemberNotFound => "The member does not exist.",
        }
    }

    pub fn into_dto(self) -> ErrorDto {
        ErrorDto {
            is_success: false,
            code: self.code().to_string(),
            message: self.message().to_string(),
        }
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> Response {
        (self.http_status(), Json(self.into_dto())).into_response()
    }
}
