//! Alarm service: sharing a space with another member and listing received alarms.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{alarm::AlarmRepository, space::SpaceRepository},
    error::{space::SpaceError, AppError},
    model::alarm::Alarm,
    service::member::require_member,
};

pub struct AlarmService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlarmService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Notifies `to_member_id` that `member_id` shared their space.
    ///
    /// The alarm content is the sharer's space nickname.
    ///
    /// # Returns
    /// - `Ok(Alarm)` - The created, unread alarm
    /// - `Err(AppError::MemberErr(_))` - Sharer or target does not exist
    /// - `Err(AppError::SpaceErr(NotFound))` - Sharer has no space
    pub async fn share_space(&self, member_id: i32, to_member_id: i32) -> Result<Alarm, AppError> {
        let txn = self.db.begin().await?;

        require_member(&txn, member_id).await?;
        let space = SpaceRepository::new(&txn)
            .find_by_member_id(member_id)
            .await?
            .ok_or(SpaceError::NotFound(member_id))?;
        require_member(&txn, to_member_id).await?;

        let alarm = AlarmRepository::new(&txn)
            .create(to_member_id, space.id, space.nickname)
            .await?;

        txn.commit().await?;

        Ok(Alarm::from_entity(alarm))
    }

    /// Gets the alarms addressed to a member in the order they were created.
    ///
    /// # Returns
    /// - `Ok(Vec<Alarm>)` - Alarms, possibly empty
    /// - `Err(AppError::MemberErr(_))` - Member does not exist
    pub async fn get_alarm_list(&self, member_id: i32) -> Result<Vec<Alarm>, AppError> {
        let txn = self.db.begin().await?;
        require_member(&txn, member_id).await?;

        let alarms = AlarmRepository::new(&txn)
            .find_by_member_id(member_id)
            .await?;

        txn.commit().await?;

        Ok(alarms.into_iter().map(Alarm::from_entity).collect())
    }
}
