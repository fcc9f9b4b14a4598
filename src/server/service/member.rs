use sea_orm::{ConnectionTrait, DatabaseConnection, SqlErr};

use crate::server::{
    data::member::MemberRepository,
    error::{internal::InternalError, member::MemberError, AppError},
    model::member::{Member, UpsertMemberParam},
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a member by id.
    ///
    /// # Returns
    /// - `Ok(Member)` - The member
    /// - `Err(AppError::MemberErr(MemberError::NotFound))` - No member with that id
    pub async fn get_member(&self, member_id: i32) -> Result<Member, AppError> {
        let member = require_member(self.db, member_id).await?;

        Ok(Member::from_entity(member)?)
    }

    /// Finds the member with the given email, creating it on first login.
    ///
    /// Two logins racing for the same new email both try the insert; the loser hits
    /// the unique index on `email` and re-reads the winner's row, so exactly one
    /// member exists per email.
    ///
    /// # Arguments
    /// - `param` - Email, provider, and display name reported by the identity provider
    ///
    /// # Returns
    /// - `Ok(Member)` - Existing or newly created member
    /// - `Err(AppError::DbErr(_))` - Database error
    pub async fn upsert_by_email(&self, param: UpsertMemberParam) -> Result<Member, AppError> {
        let repo = MemberRepository::new(self.db);

        if let Some(existing) = repo.find_by_email(&param.email).await? {
            return Ok(Member::from_entity(existing)?);
        }

        let member = create_or_reread(&repo, param).await?;

        Ok(Member::from_entity(member)?)
    }
}

/// Inserts the member, or re-reads it when a concurrent login inserted the same
/// email first.
///
/// # Returns
/// - `Ok(Model)` - The inserted row, or the row that won the unique index on `email`
/// - `Err(AppError::DbErr(_))` - Any other database error
pub(crate) async fn create_or_reread<C: ConnectionTrait>(
    repo: &MemberRepository<'_, C>,
    param: UpsertMemberParam,
) -> Result<entity::member::Model, AppError> {
    let email = param.email.clone();
    match repo.create(param).await {
        Ok(created) => {
            tracing::info!("Created member {} on first login", created.id);
            Ok(created)
        }
        Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            tracing::debug!("Member insert lost race on email, re-reading");
            let existing = repo
                .find_by_email(&email)
                .await?
                .ok_or(InternalError::MissingAfterWrite("member"))?;

            Ok(existing)
        }
        Err(err) => Err(err.into()),
    }
}

/// Loads a member or fails with `MemberNotFound`.
///
/// Shared by services that must resolve the requester inside their own transaction.
pub(crate) async fn require_member<C: ConnectionTrait>(
    db: &C,
    member_id: i32,
) -> Result<entity::member::Model, AppError> {
    MemberRepository::new(db)
        .find_by_id(member_id)
        .await?
        .ok_or_else(|| MemberError::NotFound(member_id).into())
}
