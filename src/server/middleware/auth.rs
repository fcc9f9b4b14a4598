use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::error::{auth::AuthError, AppError};

/// Header carrying the authenticated member's id, set by the upstream gateway.
pub const MEMBER_ID_HEADER: &str = "member-id";

/// Id of the member making the request.
///
/// Extracted from the `member-id` header. Authentication happens upstream; this
/// extractor only requires the header to be present and to hold an integer id.
/// Whether the member still exists is checked by the service handling the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequesterId(pub i32);

impl<S> FromRequestParts<S> for RequesterId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(MEMBER_ID_HEADER) else {
            return Err(AuthError::MissingMemberHeader.into());
        };

        let raw = value.to_str().map_err(|_| {
            AuthError::InvalidMemberHeader(String::from_utf8_lossy(value.as_bytes()).into_owned())
        })?;

        let member_id = raw
            .trim()
            .parse::<i32>()
            .map_err(|_| AuthError::InvalidMemberHeader(raw.to_string()))?;

        Ok(Self(member_id))
    }
}
