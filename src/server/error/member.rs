use thiserror::Error;

use crate::server::error::status::ErrorStatus;

#[derive(Error, Debug)]
pub enum MemberError {
    #[error("Member {0} not found")]
    NotFound(i32),
}

impl MemberError {
    pub fn status(&self) -> ErrorStatus {
        match self {
            Self::NotFound(_) => ErrorStatus::MemberNotFound,
        }
    }
}
