use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{
        alarm::{self, ALARM_TAG},
        auth::{self, AUTH_TAG},
        member::{self, MEMBER_TAG},
        profile::{self, PROFILE_TAG},
        space::{self, SPACE_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "AboutMe API", description = "Member spaces, profiles, and alarms"),
    tags(
        (name = AUTH_TAG, description = "Google login"),
        (name = MEMBER_TAG, description = "Members"),
        (name = SPACE_TAG, description = "Member spaces"),
        (name = PROFILE_TAG, description = "Profiles and profile storage"),
        (name = ALARM_TAG, description = "Space sharing alarms")
    )
)]
struct ApiDoc;

/// Builds the API routes together with their OpenAPI document.
pub fn router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .routes(routes!(member::get_me))
        .routes(routes!(
            space::join_space,
            space::read_space,
            space::delete_space
        ))
        .routes(routes!(profile::get_my_profiles, profile::create_my_profile))
        .routes(routes!(
            profile::get_my_profile,
            profile::update_my_profile,
            profile::delete_my_profile
        ))
        .routes(routes!(profile::update_my_profile_image))
        .routes(routes!(profile::share_profiles))
        .routes(routes!(profile::get_my_storage))
        .routes(routes!(alarm::share_space))
        .routes(routes!(alarm::get_alarm_list))
        .split_for_parts()
}
