//! Member domain models and parameters.

use crate::{model::member::MemberDto, server::error::internal::InternalError};

/// Identity provider a member signed up through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Social {
    Google,
}

impl Social {
    /// Value stored in the `member.social` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Google => "GOOGLE",
        }
    }

    /// Parses a stored `member.social` value.
    ///
    /// # Returns
    /// - `Ok(Social)` - Known provider
    /// - `Err(InternalError::UnknownStoredValue)` - Column holds an unrecognized value
    pub fn parse(value: &str) -> Result<Self, InternalError> {
        match value {
            "GOOGLE" => Ok(Self::Google),
            other => Err(InternalError::UnknownStoredValue {
                column: "member.social",
                value: other.to_string(),
            }),
        }
    }
}

/// A registered member.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: i32,
    pub email: String,
    pub social: Social,
    /// Display name reported by the identity provider, if any.
    pub name: Option<String>,
}

impl Member {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The member entity from the database
    ///
    /// # Returns
    /// - `Ok(Member)` - Converted domain model
    /// - `Err(InternalError::UnknownStoredValue)` - Stored social provider is unknown
    pub fn from_entity(entity: entity::member::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            email: entity.email,
            social: Social::parse(&entity.social)?,
            name: entity.name,
        })
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            member_id: self.id,
            email: self.email,
            social: self.social.as_str().to_string(),
            name: self.name,
        }
    }
}

/// Parameters for finding or creating a member after an OAuth login.
#[derive(Debug, Clone)]
pub struct UpsertMemberParam {
    pub email: String,
    pub social: Social,
    pub name: Option<String>,
}
