use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        alarm::{AlarmDto, AlarmListDto, ShareSpaceDto},
        api::{ApiResponse, ErrorDto},
    },
    server::{
        error::AppError, middleware::auth::RequesterId, model::alarm::Alarm,
        service::alarm::AlarmService, state::AppState,
    },
};

/// Tag for grouping alarm endpoints in OpenAPI documentation
pub static ALARM_TAG: &str = "alarm";

/// Share the requesting member's space with another member.
///
/// Creates an alarm for `to_member_id` whose content is the sharer's space nickname.
///
/// # Returns
/// - `200 OK` - Alarm created, `null` result
/// - `404 Not Found` - Sharer or target member not found, or sharer has no space
#[utoipa::path(
    post,
    path = "/alarms/space",
    tag = ALARM_TAG,
    params(("member-id" = i32, Header, description = "Requesting member ID")),
    request_body = ShareSpaceDto,
    responses(
        (status = 200, description = "Space shared"),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 401, description = "Missing member-id header", body = ErrorDto),
        (status = 404, description = "Member or space not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn share_space(
    State(state): State<AppState>,
    RequesterId(member_id): RequesterId,
    payload: Result<Json<ShareSpaceDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let alarm = AlarmService::new(&state.db)
        .share_space(member_id, payload.to_member_id)
        .await?;

    tracing::info!(
        "Member {} shared space {} with member {}",
        member_id,
        alarm.space_id,
        alarm.member_id
    );

    Ok(Json(ApiResponse::<()>::empty()))
}

/// List the alarms addressed to the requesting member, oldest first.
///
/// # Returns
/// - `200 OK` - Alarms, possibly empty
/// - `404 Not Found` - Member not found
#[utoipa::path(
    get,
    path = "/alarms",
    tag = ALARM_TAG,
    params(("member-id" = i32, Header, description = "Requesting member ID")),
    responses(
        (status = 200, description = "Member's alarms", body = ApiResponse<AlarmListDto>),
        (status = 401, description = "Missing member-id header", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_alarm_list(
    State(state): State<AppState>,
    RequesterId(member_id): RequesterId,
) -> Result<impl IntoResponse, AppError> {
    let alarms = AlarmService::new(&state.db).get_alarm_list(member_id).await?;

    let alarms: Vec<AlarmDto> = alarms.into_iter().map(Alarm::into_dto).collect();

    Ok(Json(ApiResponse::on_success(AlarmListDto { alarms })))
}
