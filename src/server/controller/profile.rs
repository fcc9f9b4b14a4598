use axum::{
    extract::{
        multipart::MultipartRejection,
        rejection::{JsonRejection, PathRejection},
        Multipart, Path, State,
    },
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        profile::{
            CreateProfileDto, ProfileDetailDto, ProfileFeatureDto, ProfileImageDto,
            ProfileImageForm, ProfileListDto, ShareProfileDto, UpdateProfileDto,
            UpdateProfileImageDto,
        },
    },
    server::{
        error::AppError,
        middleware::{auth::RequesterId, precondition::PreconditionGuard},
        model::profile::{
            CreateProfileParams, ProfileSummary, UpdateFeatureParams, UpdateProfileImageParams,
            UploadedImage,
        },
        service::{member_profile::MemberProfileService, profile::ProfileService},
        state::AppState,
    },
};

/// Tag for grouping profile endpoints in OpenAPI documentation
pub static PROFILE_TAG: &str = "profile";

/// List the requesting member's profiles.
///
/// # Returns
/// - `200 OK` - Profile summaries, oldest first
/// - `404 Not Found` - Member not found
#[utoipa::path(
    get,
    path = "/myprofiles",
    tag = PROFILE_TAG,
    params(("member-id" = i32, Header, description = "Requesting member ID")),
    responses(
        (status = 200, description = "Member's profiles", body = ApiResponse<ProfileListDto>),
        (status = 401, description = "Missing member-id header", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_profiles(
    State(state): State<AppState>,
    RequesterId(member_id): RequesterId,
) -> Result<impl IntoResponse, AppError> {
    let profiles = ProfileService::new(&state.db)
        .get_my_profiles(member_id)
        .await?;

    Ok(Json(ApiResponse::on_success(into_list_dto(profiles))))
}

/// Get one of the requesting member's profiles with its features and image.
///
/// # Returns
/// - `200 OK` - Profile detail
/// - `404 Not Found` - Profile does not exist or belongs to another member
#[utoipa::path(
    get,
    path = "/myprofiles/{profile_id}",
    tag = PROFILE_TAG,
    params(
        ("member-id" = i32, Header, description = "Requesting member ID"),
        ("profile_id" = i32, Path, description = "Profile ID")
    ),
    responses(
        (status = 200, description = "Profile detail", body = ApiResponse<ProfileDetailDto>),
        (status = 401, description = "Missing member-id header", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_profile(
    State(state): State<AppState>,
    RequesterId(member_id): RequesterId,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(profile_id) = path?;

    PreconditionGuard::new(&state.db)
        .require_my_profile(member_id, profile_id)
        .await?;

    let profile = ProfileService::new(&state.db)
        .get_my_profile(member_id, profile_id)
        .await?;

    Ok(Json(ApiResponse::on_success(profile.into_dto())))
}

/// Create a profile for the requesting member.
///
/// The profile gets a random six digit serial number, the default features
/// (`name`, `mbti`, `birthday`, `residence`, `hobby`), and the default image.
///
/// # Returns
/// - `200 OK` - The created profile
/// - `400 Bad Request` - Blank name, or the member already has the maximum number
///   of profiles
/// - `404 Not Found` - Member not found
#[utoipa::path(
    post,
    path = "/myprofiles",
    tag = PROFILE_TAG,
    params(("member-id" = i32, Header, description = "Requesting member ID")),
    request_body = CreateProfileDto,
    responses(
        (status = 200, description = "Created profile", body = ApiResponse<ProfileDetailDto>),
        (status = 400, description = "Invalid name or profile limit reached", body = ErrorDto),
        (status = 401, description = "Missing member-id header", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_my_profile(
    State(state): State<AppState>,
    RequesterId(member_id): RequesterId,
    payload: Result<Json<CreateProfileDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = CreateProfileParams::from_dto(payload)?;

    let profile = ProfileService::new(&state.db)
        .create_my_profile(member_id, params)
        .await?;

    tracing::info!(
        "Member {} created profile {} ({})",
        member_id,
        profile.profile.id,
        profile.profile.serial_number
    );

    Ok(Json(ApiResponse::on_success(profile.into_dto())))
}

/// Change the value of one feature on one of the requesting member's profiles.
///
/// # Returns
/// - `200 OK` - The updated feature
/// - `400 Bad Request` - Malformed body or blank feature key
/// - `404 Not Found` - Profile not owned by the member, or feature not on the profile
#[utoipa::path(
    patch,
    path = "/myprofiles/{profile_id}",
    tag = PROFILE_TAG,
    params(
        ("member-id" = i32, Header, description = "Requesting member ID"),
        ("profile_id" = i32, Path, description = "Profile ID")
    ),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated feature", body = ApiResponse<ProfileFeatureDto>),
        (status = 400, description = "Invalid feature data", body = ErrorDto),
        (status = 401, description = "Missing member-id header", body = ErrorDto),
        (status = 404, description = "Profile or feature not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_my_profile(
    State(state): State<AppState>,
    RequesterId(member_id): RequesterId,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateProfileDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(profile_id) = path?;
    let Json(payload) = payload?;

    let guard = PreconditionGuard::new(&state.db);
    guard.require_my_profile(member_id, profile_id).await?;
    guard.require_feature(profile_id, payload.feature_id).await?;

    let params = UpdateFeatureParams::from_dto(profile_id, payload)?;
    let feature = ProfileService::new(&state.db)
        .update_my_profile(member_id, params)
        .await?;

    tracing::info!(
        "Member {} updated feature {} on profile {}",
        member_id,
        feature.id,
        profile_id
    );

    Ok(Json(ApiResponse::on_success(feature.into_dto())))
}

/// Set the image of one of the requesting member's profiles.
///
/// Multipart form with a JSON `body` part holding `profile_image_type` and an
/// optional `image` file part. `USER_IMAGE` requires the file; `DEFAULT` resets
/// to the built-in image.
///
/// # Returns
/// - `200 OK` - The updated image
/// - `400 Bad Request` - Malformed form, or `USER_IMAGE` without a file
/// - `404 Not Found` - Profile not owned by the member
#[utoipa::path(
    patch,
    path = "/myprofiles/{profile_id}/image",
    tag = PROFILE_TAG,
    params(
        ("member-id" = i32, Header, description = "Requesting member ID"),
        ("profile_id" = i32, Path, description = "Profile ID")
    ),
    request_body(content = ProfileImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Updated image", body = ApiResponse<ProfileImageDto>),
        (status = 400, description = "Invalid form or image required", body = ErrorDto),
        (status = 401, description = "Missing member-id header", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_my_profile_image(
    State(state): State<AppState>,
    RequesterId(member_id): RequesterId,
    path: Result<Path<i32>, PathRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(profile_id) = path?;
    let (body, image) = read_image_form(multipart?).await?;

    PreconditionGuard::new(&state.db)
        .require_my_profile(member_id, profile_id)
        .await?;

    let params = UpdateProfileImageParams {
        profile_id,
        image_type: body.profile_image_type,
        image,
    };
    let image = ProfileService::new(&state.db)
        .update_my_profile_image(member_id, params, &state.image_storage)
        .await?;

    tracing::info!(
        "Member {} set profile {} image to {:?}",
        member_id,
        profile_id,
        image.image_type
    );

    Ok(Json(ApiResponse::on_success(image.into_dto())))
}

/// Delete one of the requesting member's profiles.
///
/// Removes the profile's features and image and drops it from every other member's
/// storage.
///
/// # Returns
/// - `200 OK` - Profile deleted, `null` result
/// - `404 Not Found` - Profile not owned by the member
#[utoipa::path(
    delete,
    path = "/myprofiles/{profile_id}",
    tag = PROFILE_TAG,
    params(
        ("member-id" = i32, Header, description = "Requesting member ID"),
        ("profile_id" = i32, Path, description = "Profile ID")
    ),
    responses(
        (status = 200, description = "Profile deleted"),
        (status = 401, description = "Missing member-id header", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_my_profile(
    State(state): State<AppState>,
    RequesterId(member_id): RequesterId,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(profile_id) = path?;

    PreconditionGuard::new(&state.db)
        .require_my_profile(member_id, profile_id)
        .await?;

    ProfileService::new(&state.db)
        .delete_my_profile(member_id, profile_id, &state.image_storage)
        .await?;

    tracing::info!("Member {} deleted profile {}", member_id, profile_id);

    Ok(Json(ApiResponse::<()>::empty()))
}

/// Add other members' profiles to the requesting member's storage by serial number.
///
/// Profiles already stored and the member's own profiles are skipped.
///
/// # Returns
/// - `200 OK` - Profiles stored, `null` result
/// - `400 Bad Request` - Malformed body or empty serial number list
/// - `404 Not Found` - Member not found or a serial number matches no profile
#[utoipa::path(
    post,
    path = "/myprofiles/share",
    tag = PROFILE_TAG,
    params(("member-id" = i32, Header, description = "Requesting member ID")),
    request_body = ShareProfileDto,
    responses(
        (status = 200, description = "Profiles stored"),
        (status = 400, description = "Invalid serial number list", body = ErrorDto),
        (status = 401, description = "Missing member-id header", body = ErrorDto),
        (status = 404, description = "Member or profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn share_profiles(
    State(state): State<AppState>,
    RequesterId(member_id): RequesterId,
    payload: Result<Json<ShareProfileDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    PreconditionGuard::new(&state.db)
        .require_profiles_by_serial_numbers(&payload.profile_serial_numbers)
        .await?;

    let added = MemberProfileService::new(&state.db)
        .add_others_profiles_at_my_storage(member_id, payload.profile_serial_numbers)
        .await?;

    tracing::info!("Member {} stored {} shared profiles", member_id, added);

    Ok(Json(ApiResponse::<()>::empty()))
}

/// List the profiles in the requesting member's storage, in the order they were added.
///
/// # Returns
/// - `200 OK` - Stored profile summaries
/// - `404 Not Found` - Member not found
#[utoipa::path(
    get,
    path = "/myprofiles/storage",
    tag = PROFILE_TAG,
    params(("member-id" = i32, Header, description = "Requesting member ID")),
    responses(
        (status = 200, description = "Stored profiles", body = ApiResponse<ProfileListDto>),
        (status = 401, description = "Missing member-id header", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_storage(
    State(state): State<AppState>,
    RequesterId(member_id): RequesterId,
) -> Result<impl IntoResponse, AppError> {
    let profiles = MemberProfileService::new(&state.db)
        .get_my_storage(member_id)
        .await?;

    Ok(Json(ApiResponse::on_success(into_list_dto(profiles))))
}

fn into_list_dto(profiles: Vec<ProfileSummary>) -> ProfileListDto {
    ProfileListDto {
        profiles: profiles.into_iter().map(ProfileSummary::into_dto).collect(),
    }
}

/// Reads the `body` and optional `image` parts of the image update form.
///
/// An empty `image` part counts as no file. Unknown parts are ignored.
async fn read_image_form(
    mut multipart: Multipart,
) -> Result<(UpdateProfileImageDto, Option<UploadedImage>), AppError> {
    let mut body = None;
    let mut image = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "body" => {
                let bytes = field.bytes().await?;
                let dto = serde_json::from_slice::<UpdateProfileImageDto>(&bytes)
                    .map_err(|e| AppError::BadRequest(format!("Invalid body part: {}", e)))?;
                body = Some(dto);
            }
            "image" => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;

                if !bytes.is_empty() {
                    image = Some(UploadedImage {
                        file_name,
                        content_type,
                        bytes,
                    });
                }
            }
            _ => continue,
        }
    }

    let body = body.ok_or_else(|| AppError::BadRequest("Missing body part".to_string()))?;

    Ok((body, image))
}
