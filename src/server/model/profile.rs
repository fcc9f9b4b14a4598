//! Profile domain models and parameters.
//!
//! A profile is one of a member's shareable cards: a name, a six digit serial number
//! other members use to add it to their storage, a list of key/value features, and a
//! single image.

use axum::body::Bytes;

use crate::{
    model::profile::{
        CreateProfileDto, ProfileDetailDto, ProfileFeatureDto, ProfileImageDto, ProfileImageType,
        ProfileSummaryDto, UpdateProfileDto,
    },
    server::error::{internal::InternalError, AppError},
};

/// Maximum number of profiles a single member may own.
pub const MAX_PROFILE_COUNT: u64 = 3;

/// Feature keys every new profile starts with. `name` is filled with the profile name.
pub const DEFAULT_FEATURE_KEYS: [&str; 5] = ["name", "mbti", "birthday", "residence", "hobby"];

/// Feature key whose initial value is the profile name.
pub const NAME_FEATURE_KEY: &str = "name";

/// Lowest and highest serial numbers handed out, both six digits.
pub const SERIAL_NUMBER_MIN: i32 = 100_000;
pub const SERIAL_NUMBER_MAX: i32 = 999_999;

/// Value stored in the `profile_image.profile_image_type` column.
pub fn image_type_as_str(image_type: ProfileImageType) -> &'static str {
    match image_type {
        ProfileImageType::Default => "DEFAULT",
        ProfileImageType::UserImage => "USER_IMAGE",
    }
}

/// Parses a stored `profile_image.profile_image_type` value.
pub fn parse_image_type(value: &str) -> Result<ProfileImageType, InternalError> {
    match value {
        "DEFAULT" => Ok(ProfileImageType::Default),
        "USER_IMAGE" => Ok(ProfileImageType::UserImage),
        other => Err(InternalError::UnknownStoredValue {
            column: "profile_image.profile_image_type",
            value: other.to_string(),
        }),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: i32,
    pub member_id: i32,
    pub serial_number: i32,
    pub name: String,
}

impl Profile {
    pub fn from_entity(entity: entity::profile::Model) -> Self {
        Self {
            id: entity.id,
            member_id: entity.member_id,
            serial_number: entity.serial_number,
            name: entity.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileFeature {
    pub id: i32,
    pub profile_id: i32,
    pub key: String,
    pub value: String,
}

impl ProfileFeature {
    pub fn from_entity(entity: entity::profile_feature::Model) -> Self {
        Self {
            id: entity.id,
            profile_id: entity.profile_id,
            key: entity.feature_key,
            value: entity.feature_value,
        }
    }

    pub fn into_dto(self) -> ProfileFeatureDto {
        ProfileFeatureDto {
            feature_id: self.id,
            feature_key: self.key,
            feature_value: self.value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileImage {
    pub id: i32,
    pub profile_id: i32,
    pub image_type: ProfileImageType,
    /// Public URL of the uploaded file, `None` for the default image.
    pub image_url: Option<String>,
}

impl ProfileImage {
    pub fn from_entity(entity: entity::profile_image::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            profile_id: entity.profile_id,
            image_type: parse_image_type(&entity.profile_image_type)?,
            image_url: entity.image_url,
        })
    }

    pub fn into_dto(self) -> ProfileImageDto {
        ProfileImageDto {
            profile_image_id: self.id,
            profile_image_type: self.image_type,
            image_url: self.image_url,
        }
    }
}

/// Profile as shown in list views: no features.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSummary {
    pub profile: Profile,
    pub image: Option<ProfileImage>,
}

impl ProfileSummary {
    pub fn into_dto(self) -> ProfileSummaryDto {
        ProfileSummaryDto {
            profile_id: self.profile.id,
            serial_number: self.profile.serial_number,
            name: self.profile.name,
            image: self.image.map(ProfileImage::into_dto),
        }
    }
}

/// Profile with all of its features and its image.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDetail {
    pub profile: Profile,
    pub features: Vec<ProfileFeature>,
    pub image: Option<ProfileImage>,
}

impl ProfileDetail {
    pub fn into_dto(self) -> ProfileDetailDto {
        ProfileDetailDto {
            profile_id: self.profile.id,
            serial_number: self.profile.serial_number,
            name: self.profile.name,
            features: self
                .features
                .into_iter()
                .map(ProfileFeature::into_dto)
                .collect(),
            image: self.image.map(ProfileImage::into_dto),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProfileParams {
    pub name: String,
}

impl CreateProfileParams {
    /// Converts the request DTO, rejecting a blank name.
    pub fn from_dto(dto: CreateProfileDto) -> Result<Self, AppError> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("name must not be empty".to_string()));
        }

        Ok(Self { name })
    }
}

/// Parameters for changing the value of one profile feature.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateFeatureParams {
    pub profile_id: i32,
    pub feature_id: i32,
    /// Key the client believes the feature has. Only the value is written.
    pub feature_key: String,
    pub feature_value: String,
}

impl UpdateFeatureParams {
    /// Converts the request DTO, rejecting a blank feature key.
    pub fn from_dto(profile_id: i32, dto: UpdateProfileDto) -> Result<Self, AppError> {
        if dto.feature_key.trim().is_empty() {
            return Err(AppError::BadRequest(
                "feature_key must not be empty".to_string(),
            ));
        }

        Ok(Self {
            profile_id,
            feature_id: dto.feature_id,
            feature_key: dto.feature_key,
            feature_value: dto.feature_value,
        })
    }
}

/// A file received in the `image` part of a multipart request.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// File name sent by the client, used only for its extension.
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

#[derive(Debug, Clone)]
pub struct UpdateProfileImageParams {
    pub profile_id: i32,
    pub image_type: ProfileImageType,
    pub image: Option<UploadedImage>,
}
