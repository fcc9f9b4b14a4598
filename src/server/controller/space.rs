use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        space::{JoinSpaceDto, SpaceDto},
    },
    server::{
        error::AppError, middleware::auth::RequesterId, model::space::JoinSpaceParams,
        service::space::SpaceService, state::AppState,
    },
};

/// Tag for grouping space endpoints in OpenAPI documentation
pub static SPACE_TAG: &str = "space";

/// Create the requesting member's space.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `member_id` - Requesting member from the `member-id` header
/// - `payload` - Nickname, character type (1-9), room type (1-4), mood, and optional
///   music URL and status message
///
/// # Returns
/// - `200 OK` - The created space
/// - `400 Bad Request` - Malformed body, blank nickname, or type out of range
/// - `404 Not Found` - Member not found
/// - `409 Conflict` - Member already has a space
#[utoipa::path(
    post,
    path = "/spaces",
    tag = SPACE_TAG,
    params(("member-id" = i32, Header, description = "Requesting member ID")),
    request_body = JoinSpaceDto,
    responses(
        (status = 200, description = "Created space", body = ApiResponse<SpaceDto>),
        (status = 400, description = "Invalid space data", body = ErrorDto),
        (status = 401, description = "Missing member-id header", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 409, description = "Space already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_space(
    State(state): State<AppState>,
    RequesterId(member_id): RequesterId,
    payload: Result<Json<JoinSpaceDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = JoinSpaceParams::from_dto(payload)?;

    let space = SpaceService::new(&state.db)
        .join_space(member_id, params)
        .await?;

    tracing::info!("Member {} joined space {}", member_id, space.id);

    Ok(Json(ApiResponse::on_success(space.into_dto())))
}

/// Get the requesting member's space.
///
/// Returns a `null` result when the member has not joined yet.
///
/// # Returns
/// - `200 OK` - The space with its images and plans, or `null`
/// - `404 Not Found` - Member not found
#[utoipa::path(
    get,
    path = "/spaces",
    tag = SPACE_TAG,
    params(("member-id" = i32, Header, description = "Requesting member ID")),
    responses(
        (status = 200, description = "Member's space or null", body = ApiResponse<SpaceDto>),
        (status = 401, description = "Missing member-id header", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn read_space(
    State(state): State<AppState>,
    RequesterId(member_id): RequesterId,
) -> Result<impl IntoResponse, AppError> {
    let space = SpaceService::new(&state.db).read_space(member_id).await?;

    Ok(Json(ApiResponse::from_option(space.map(|s| s.into_dto()))))
}

/// Delete the requesting member's space with its images, plans, and alarms.
///
/// # Returns
/// - `200 OK` - Space deleted, `null` result
/// - `404 Not Found` - Member not found or member has no space
#[utoipa::path(
    delete,
    path = "/spaces",
    tag = SPACE_TAG,
    params(("member-id" = i32, Header, description = "Requesting member ID")),
    responses(
        (status = 200, description = "Space deleted"),
        (status = 401, description = "Missing member-id header", body = ErrorDto),
        (status = 404, description = "Member or space not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_space(
    State(state): State<AppState>,
    RequesterId(member_id): RequesterId,
) -> Result<impl IntoResponse, AppError> {
    SpaceService::new(&state.db).delete_space(member_id).await?;

    tracing::info!("Member {} deleted their space", member_id);

    Ok(Json(ApiResponse::<()>::empty()))
}
