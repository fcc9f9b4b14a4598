use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Code returned with every successful response.
pub const SUCCESS_CODE: &str = "COMMON200";
/// Message returned with every successful response.
pub const SUCCESS_MESSAGE: &str = "Request succeeded.";

/// Uniform success envelope wrapping every endpoint's result.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ApiResponse<T> {
    #[serde(rename = "isSuccess")]
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn on_success(result: T) -> Self {
        Self::from_option(Some(result))
    }

    pub fn from_option(result: Option<T>) -> Self {
        Self {
            is_success: true,
            code: SUCCESS_CODE.to_string(),
            message: SUCCESS_MESSAGE.to_string(),
            result,
        }
    }

    /// Success envelope with a `null` result.
    pub fn empty() -> Self {
        Self::from_option(None)
    }
}

/// Error envelope produced by the global error handler.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorDto {
    #[serde(rename = "isSuccess")]
    pub is_success: bool,
    pub code: String,
    pub message: String,
}
