use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        member::MemberDto,
    },
    server::{
        error::AppError, middleware::auth::RequesterId, service::member::MemberService,
        state::AppState,
    },
};

/// Tag for grouping member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// Get the requesting member.
///
/// # Returns
/// - `200 OK` - The member identified by the `member-id` header
/// - `401 Unauthorized` - Missing or malformed `member-id` header
/// - `404 Not Found` - No such member
#[utoipa::path(
    get,
    path = "/members/me",
    tag = MEMBER_TAG,
    params(("member-id" = i32, Header, description = "Requesting member ID")),
    responses(
        (status = 200, description = "Requesting member", body = ApiResponse<MemberDto>),
        (status = 401, description = "Missing member-id header", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    RequesterId(member_id): RequesterId,
) -> Result<impl IntoResponse, AppError> {
    let member = MemberService::new(&state.db).get_member(member_id).await?;

    Ok(Json(ApiResponse::on_success(member.into_dto())))
}
