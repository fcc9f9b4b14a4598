use thiserror::Error;

use crate::server::error::status::ErrorStatus;

#[derive(Error, Debug)]
pub enum ProfileError {
    /// Member already owns the maximum number of profiles.
    #[error("Member {member_id} already has the maximum of {max} profiles")]
    SizeOverflow { member_id: i32, max: u64 },

    /// Profile does not exist or is not owned by the requesting member.
    #[error("Profile {profile_id} not found for member {member_id}")]
    NotFound { member_id: i32, profile_id: i32 },

    /// No profile carries one of the requested serial numbers.
    #[error("No profile with serial number {0}")]
    SerialNumberNotFound(i32),

    /// Feature does not exist or belongs to another profile.
    #[error("Feature {feature_id} not found on profile {profile_id}")]
    FeatureNotFound { profile_id: i32, feature_id: i32 },

    /// `USER_IMAGE` was requested without an uploaded file.
    #[error("Profile image type USER_IMAGE requires an uploaded file")]
    ImageRequired,
}

impl ProfileError {
    pub fn status(&self) -> ErrorStatus {
        match self {
            Self::SizeOverflow { .. } => ErrorStatus::ProfileSizeOverflow,
            Self::NotFound { .. } | Self::SerialNumberNotFound(_) => ErrorStatus::ProfileNotFound,
            Self::FeatureNotFound { .. } => ErrorStatus::FeatureNotFound,
            Self::ImageRequired => ErrorStatus::ProfileImageRequired,
        }
    }
}
