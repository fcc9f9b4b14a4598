use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        member::MemberDto,
    },
    server::{
        error::AppError, middleware::session::CsrfSession, service::auth::GoogleAuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Query parameters Google appends when redirecting back to the callback.
///
/// # Fields
/// - `code` - Authorization code used to exchange for an access token
/// - `state` - CSRF protection token that must match the value stored in the session
#[derive(Deserialize, IntoParams)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
}

/// Start the Google login flow.
///
/// Stores a random CSRF state in the session and redirects the browser to
/// Google's authorization page.
///
/// # Returns
/// - `307 Temporary Redirect` - Redirect to Google
/// - `500 Internal Server Error` - Failed to store the state in the session
#[utoipa::path(
    get,
    path = "/auth/google/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the Google authorization page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = GoogleAuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.userinfo_url,
    );

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Finish the Google login flow.
///
/// Validates the CSRF state, exchanges the authorization code for an access token,
/// reads the account's email, and returns the member owning that email. The member
/// is created on first login.
///
/// # Returns
/// - `200 OK` - The logged in member
/// - `401 Unauthorized` - Missing code or the identity provider rejected the login
/// - `403 Forbidden` - CSRF state missing or mismatched
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    get,
    path = "/auth/google/callback",
    tag = AUTH_TAG,
    params(CallbackParams),
    responses(
        (status = 200, description = "Logged in member", body = ApiResponse<MemberDto>),
        (status = 401, description = "Login rejected by the identity provider", body = ErrorDto),
        (status = 403, description = "CSRF state mismatch", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Result<Query<CallbackParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;

    CsrfSession::new(&session)
        .validate(params.state.as_deref().unwrap_or_default())
        .await?;

    let auth_service = GoogleAuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.userinfo_url,
    );
    let member = auth_service.callback(params.code).await?;

    tracing::info!("Member {} logged in", member.id);

    Ok(Json(ApiResponse::on_success(member.into_dto())))
}
