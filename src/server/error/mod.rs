//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into the uniform error envelope. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse`, so every handler failure is mapped by this single place.

pub mod auth;
pub mod config;
pub mod internal;
pub mod member;
pub mod profile;
pub mod space;
pub mod status;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{
    auth::AuthError, config::ConfigError, internal::InternalError, member::MemberError,
    profile::ProfileError, space::SpaceError, status::ErrorStatus,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Domain
/// errors resolve to their own catalog entry; infrastructure errors all resolve to
/// `COMMON500` and are logged with full detail server-side.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Missing identity or failed OAuth login.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    #[error(transparent)]
    MemberErr(#[from] MemberError),

    #[error(transparent)]
    SpaceErr(#[from] SpaceError),

    #[error(transparent)]
    ProfileErr(#[from] ProfileError),

    /// Unexpected state indicating a bug or corrupted data.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client construction or request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Filesystem or socket error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Malformed request body, path, or missing required field.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request, logged only
    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    /// Resolves the catalog entry sent to the client for this error.
    pub fn status(&self) -> ErrorStatus {
        match self {
            Self::AuthErr(err) => err.status(),
            Self::MemberErr(err) => err.status(),
            Self::SpaceErr(err) => err.status(),
            Self::ProfileErr(err) => err.status(),
            Self::BadRequest(_) => ErrorStatus::BadRequest,
            Self::ConfigErr(_)
            | Self::InternalErr(_)
            | Self::DbErr(_)
            | Self::SessionErr(_)
            | Self::ReqwestErr(_)
            | Self::IoErr(_) => ErrorStatus::InternalServerError,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        Self::BadRequest(err.body_text())
    }
}

/// Converts application errors into error envelope responses.
///
/// Internal errors are logged at error level with full details while the client
/// only receives the generic `COMMON500` message. Domain errors are expected
/// outcomes and are logged at debug level.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status == ErrorStatus::InternalServerError {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("{} -> {}", self, status.code());
        }

        status.into_response()
    }
}
