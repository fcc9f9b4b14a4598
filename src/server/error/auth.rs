use thiserror::Error;

use crate::server::error::status::ErrorStatus;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The `member-id` header was not sent.
    #[error("Request is missing the member-id header")]
    MissingMemberHeader,

    /// The `member-id` header is not a valid member ID.
    #[error("Invalid member-id header value '{0}'")]
    InvalidMemberHeader(String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state in the callback URL does not match the token stored in the
    /// session, indicating a forged or replayed callback request.
    #[error("Failed to login member due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// The provider redirected back without an authorization code.
    #[error("Failed to get authorization code")]
    MissingAuthorizationCode,

    /// Exchanging the authorization code for an access token failed.
    #[error("Token exchange with identity provider failed: {0}")]
    TokenExchange(String),

    /// The userinfo request failed or returned an unreadable body.
    #[error("Userinfo request to identity provider failed: {0}")]
    UserInfoRequest(#[source] reqwest::Error),

    /// The userinfo response had no email.
    #[error("Identity provider did not return an email")]
    MissingEmail,
}

impl AuthError {
    pub fn status(&self) -> ErrorStatus {
        match self {
            Self::CsrfValidationFailed => ErrorStatus::Forbidden,
            Self::MissingMemberHeader
            | Self::InvalidMemberHeader(_)
            | Self::MissingAuthorizationCode
            | Self::TokenExchange(_)
            | Self::UserInfoRequest(_)
            | Self::MissingEmail => ErrorStatus::Unauthorized,
        }
    }
}

impl<RE, T> From<oauth2::RequestTokenError<RE, T>> for AuthError
where
    RE: std::error::Error + 'static,
    T: oauth2::ErrorResponse + 'static,
{
    fn from(err: oauth2::RequestTokenError<RE, T>) -> Self {
        Self::TokenExchange(err.to_string())
    }
}
