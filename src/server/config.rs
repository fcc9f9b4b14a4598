use crate::server::error::{config::ConfigError, AppError};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v3/userinfo";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_UPLOAD_URL_PREFIX: &str = "/uploads";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    pub google_client_id: String,
    pub google_client_secret: String,
    pub google_redirect_url: String,

    pub google_auth_url: String,
    pub google_token_url: String,
    pub google_userinfo_url: String,

    /// Directory uploaded profile images are written to.
    pub upload_dir: String,
    /// Public path prefix the upload directory is served under.
    pub upload_url_prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_addr: optional("BIND_ADDR", DEFAULT_BIND_ADDR),
            google_client_id: required("GOOGLE_CLIENT_ID")?,
            google_client_secret: required("GOOGLE_CLIENT_SECRET")?,
            google_redirect_url: required("GOOGLE_REDIRECT_URL")?,
            google_auth_url: optional("GOOGLE_AUTH_URL", GOOGLE_AUTH_URL),
            google_token_url: optional("GOOGLE_TOKEN_URL", GOOGLE_TOKEN_URL),
            google_userinfo_url: optional("GOOGLE_USERINFO_URL", GOOGLE_USERINFO_URL),
            upload_dir: optional("UPLOAD_DIR", DEFAULT_UPLOAD_DIR),
            upload_url_prefix: optional("UPLOAD_URL_PREFIX", DEFAULT_UPLOAD_URL_PREFIX),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
