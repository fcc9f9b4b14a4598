//! Space service: joining, reading, and leaving a member's space.

use sea_orm::{ConnectionTrait, DatabaseConnection, SqlErr, TransactionTrait};

use crate::server::{
    data::{
        alarm::AlarmRepository, plan::PlanRepository, space::SpaceRepository,
        space_image::SpaceImageRepository,
    },
    error::{space::SpaceError, AppError},
    model::space::{JoinSpaceParams, Space},
    service::member::require_member,
};

pub struct SpaceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpaceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the member's space.
    ///
    /// # Arguments
    /// - `member_id` - Requesting member
    /// - `params` - Space fields; character and room type are range-checked here
    ///
    /// # Returns
    /// - `Ok(Space)` - The new space with no images or plans
    /// - `Err(AppError::SpaceErr(InvalidCharacterType | InvalidRoomType))` - Out of range
    /// - `Err(AppError::MemberErr(_))` - Member does not exist
    /// - `Err(AppError::SpaceErr(AlreadyExists))` - Member already joined
    pub async fn join_space(
        &self,
        member_id: i32,
        params: JoinSpaceParams,
    ) -> Result<Space, AppError> {
        params.validate()?;

        let txn = self.db.begin().await?;
        require_member(&txn, member_id).await?;

        let repo = SpaceRepository::new(&txn);
        if repo.find_by_member_id(member_id).await?.is_some() {
            return Err(SpaceError::AlreadyExists(member_id).into());
        }

        let space = insert_space(&repo, member_id, params).await?;
        txn.commit().await?;

        Ok(Space::from_entity(space, Vec::new(), Vec::new())?)
    }

    /// Gets the member's space with its images and plans.
    ///
    /// # Returns
    /// - `Ok(Some(Space))` - The member's space
    /// - `Ok(None)` - Member has not joined a space
    /// - `Err(AppError::MemberErr(_))` - Member does not exist
    pub async fn read_space(&self, member_id: i32) -> Result<Option<Space>, AppError> {
        let txn = self.db.begin().await?;
        require_member(&txn, member_id).await?;

        let Some(space) = SpaceRepository::new(&txn)
            .find_by_member_id(member_id)
            .await?
        else {
            return Ok(None);
        };

        let space = load_space(&txn, space).await?;
        txn.commit().await?;

        Ok(Some(space))
    }

    /// Deletes the member's space together with its images, plans, and the alarms
    /// that point at it.
    ///
    /// # Returns
    /// - `Ok(())` - Space and children removed
    /// - `Err(AppError::MemberErr(_))` - Member does not exist
    /// - `Err(AppError::SpaceErr(NotFound))` - Member has no space
    pub async fn delete_space(&self, member_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        require_member(&txn, member_id).await?;

        let repo = SpaceRepository::new(&txn);
        let space = repo
            .find_by_member_id(member_id)
            .await?
            .ok_or(SpaceError::NotFound(member_id))?;

        let images = SpaceImageRepository::new(&txn)
            .delete_by_space_id(space.id)
            .await?;
        let plans = PlanRepository::new(&txn)
            .delete_by_space_id(space.id)
            .await?;
        let alarms = AlarmRepository::new(&txn)
            .delete_by_space_id(space.id)
            .await?;
        repo.delete(space.id).await?;

        txn.commit().await?;

        tracing::debug!(
            "Deleted space {} with {} images, {} plans, {} alarms",
            space.id,
            images,
            plans,
            alarms
        );

        Ok(())
    }
}

/// Inserts the member's space, reporting a concurrent join that won the unique index
/// on `space.member_id` as `AlreadyExists`.
pub(crate) async fn insert_space<C: ConnectionTrait>(
    repo: &SpaceRepository<'_, C>,
    member_id: i32,
    params: JoinSpaceParams,
) -> Result<entity::space::Model, AppError> {
    repo.create(member_id, params)
        .await
        .map_err(|err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::from(SpaceError::AlreadyExists(member_id))
            }
            _ => AppError::from(err),
        })
}

/// Loads the images and plans of a space and converts it to a domain model.
async fn load_space<C: ConnectionTrait>(
    db: &C,
    space: entity::space::Model,
) -> Result<Space, AppError> {
    let images = SpaceImageRepository::new(db)
        .find_by_space_id(space.id)
        .await?;
    let plans = PlanRepository::new(db).find_by_space_id(space.id).await?;

    Ok(Space::from_entity(space, images, plans)?)
}
