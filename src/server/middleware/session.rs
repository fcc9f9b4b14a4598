//! Type-safe session management wrappers.
//!
//! Sessions only carry OAuth flow state. Requests after login identify the member
//! through the `member-id` header instead.

use tower_sessions::Session;

use crate::server::error::{auth::AuthError, AppError};

const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// CSRF protection session management.
///
/// Handles CSRF token storage and validation for OAuth flows. Tokens are stored
/// during login initiation and validated during the OAuth callback.
pub struct CsrfSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a CSRF token in the session.
    ///
    /// # Arguments
    /// - `token` - The CSRF token to store
    ///
    /// # Returns
    /// - `Ok(())` - Token successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Removes the stored token and compares it to the callback's `state`.
    ///
    /// The token is removed whether or not it matches, so each token is usable once.
    ///
    /// # Returns
    /// - `Ok(())` - Stored token matches `state`
    /// - `Err(AppError::AuthErr(AuthError::CsrfValidationFailed))` - No stored token,
    ///   or it differs from `state`
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn validate(&self, state: &str) -> Result<(), AppError> {
        let stored: Option<String> = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;

        match stored {
            Some(token) if token == state => Ok(()),
            _ => Err(AuthError::CsrfValidationFailed.into()),
        }
    }
}
