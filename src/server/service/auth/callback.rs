use oauth2::{AuthorizationCode, TokenResponse};
use serde::Deserialize;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::member::{Member, Social, UpsertMemberParam},
    service::{auth::GoogleAuthService, member::MemberService},
};

/// Fields read from the Google userinfo response.
#[derive(Debug, Deserialize)]
struct GoogleUserInfo {
    email: Option<String>,
    name: Option<String>,
}

impl<'a> GoogleAuthService<'a> {
    /// Completes the login started by `login_url`.
    ///
    /// # Arguments
    /// - `authorization_code` - `code` query parameter of the callback, if present
    ///
    /// # Returns
    /// - `Ok(Member)` - Member owning the Google account's email
    /// - `Err(AppError::AuthErr(_))` - Missing code, failed token exchange, failed
    ///   userinfo request, or no email in the userinfo response
    /// - `Err(AppError::DbErr(_))` - Database error while upserting the member
    pub async fn callback(&self, authorization_code: Option<String>) -> Result<Member, AppError> {
        let code = authorization_code
            .filter(|code| !code.is_empty())
            .ok_or(AuthError::MissingAuthorizationCode)?;

        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(code))
            .request_async(self.http_client)
            .await
            .map_err(AuthError::from)?;

        let user_info = self.fetch_user_info(token.access_token().secret()).await?;

        let email = user_info
            .email
            .filter(|email| !email.is_empty())
            .ok_or(AuthError::MissingEmail)?;

        MemberService::new(self.db)
            .upsert_by_email(UpsertMemberParam {
                email,
                social: Social::Google,
                name: user_info.name,
            })
            .await
    }

    /// Retrieves the account's profile using the provided access token
    async fn fetch_user_info(&self, access_token: &str) -> Result<GoogleUserInfo, AuthError> {
        self.http_client
            .get(self.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(AuthError::UserInfoRequest)?
            .json::<GoogleUserInfo>()
            .await
            .map_err(AuthError::UserInfoRequest)
    }
}
