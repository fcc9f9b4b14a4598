use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::server::service::auth::GoogleAuthService;

impl<'a> GoogleAuthService<'a> {
    /// Builds the Google authorization URL requesting the `email` scope.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - URL to redirect the browser to and the random state the
    ///   callback must echo back
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("email".to_string()))
            .url();

        (authorize_url, csrf_state)
    }
}
