use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct MemberDto {
    pub member_id: i32,
    pub email: String,
    pub social: String,
    pub name: Option<String>,
}
