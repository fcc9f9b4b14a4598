use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfileImageType {
    /// Built-in image, no upload.
    Default,
    /// Image uploaded by the member.
    UserImage,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CreateProfileDto {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UpdateProfileDto {
    pub feature_id: i32,
    pub feature_key: String,
    pub feature_value: String,
}

/// JSON carried in the `body` part of the image update multipart request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UpdateProfileImageDto {
    pub profile_image_type: ProfileImageType,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ShareProfileDto {
    pub profile_serial_numbers: Vec<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ProfileFeatureDto {
    pub feature_id: i32,
    pub feature_key: String,
    pub feature_value: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ProfileImageDto {
    pub profile_image_id: i32,
    pub profile_image_type: ProfileImageType,
    pub image_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ProfileSummaryDto {
    pub profile_id: i32,
    pub serial_number: i32,
    pub name: String,
    pub image: Option<ProfileImageDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ProfileListDto {
    pub profiles: Vec<ProfileSummaryDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ProfileDetailDto {
    pub profile_id: i32,
    pub serial_number: i32,
    pub name: String,
    pub features: Vec<ProfileFeatureDto>,
    pub image: Option<ProfileImageDto>,
}

/// Multipart form accepted by the profile image update endpoint.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct ProfileImageForm {
    /// Image file, required when `profile_image_type` is `USER_IMAGE`.
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
    /// JSON part.
    pub body: UpdateProfileImageDto,
}
