//! Member profile storage: keeping copies of other members' profiles.
//!
//! Members exchange six digit serial numbers; adding a serial number stores a
//! reference to that profile in the requester's storage.

use std::collections::HashSet;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{member_profile::MemberProfileRepository, profile::ProfileRepository},
    error::{profile::ProfileError, AppError},
    model::profile::ProfileSummary,
    service::{member::require_member, profile::load_summaries},
};

pub struct MemberProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds the profiles with the given serial numbers to the member's storage.
    ///
    /// Profiles already stored and the member's own profiles are skipped, so sending
    /// the same list twice changes nothing the second time.
    ///
    /// # Arguments
    /// - `member_id` - Requesting member
    /// - `serial_numbers` - Serial numbers of other members' profiles
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of profiles newly stored
    /// - `Err(AppError::MemberErr(_))` - Member does not exist
    /// - `Err(AppError::ProfileErr(SerialNumberNotFound))` - A serial number matches no profile
    pub async fn add_others_profiles_at_my_storage(
        &self,
        member_id: i32,
        serial_numbers: Vec<i32>,
    ) -> Result<usize, AppError> {
        let txn = self.db.begin().await?;
        require_member(&txn, member_id).await?;

        let profiles = ProfileRepository::new(&txn)
            .find_by_serial_numbers(serial_numbers.clone())
            .await?;

        let found: HashSet<i32> = profiles.iter().map(|p| p.serial_number).collect();
        if let Some(missing) = serial_numbers.iter().find(|s| !found.contains(s)) {
            return Err(ProfileError::SerialNumberNotFound(*missing).into());
        }

        let storage_repo = MemberProfileRepository::new(&txn);
        let mut added = 0;
        for profile in profiles {
            if profile.member_id == member_id {
                continue;
            }
            if storage_repo.create_if_absent(member_id, profile.id).await? {
                added += 1;
            }
        }

        txn.commit().await?;

        Ok(added)
    }

    /// Gets the profiles in the member's storage in the order they were added.
    ///
    /// # Returns
    /// - `Ok(Vec<ProfileSummary>)` - Stored profiles with their images
    /// - `Err(AppError::MemberErr(_))` - Member does not exist
    pub async fn get_my_storage(&self, member_id: i32) -> Result<Vec<ProfileSummary>, AppError> {
        let txn = self.db.begin().await?;
        require_member(&txn, member_id).await?;

        let entries = MemberProfileRepository::new(&txn)
            .find_by_member_id(member_id)
            .await?;
        let order: Vec<i32> = entries.iter().map(|e| e.profile_id).collect();

        let mut profiles = ProfileRepository::new(&txn)
            .find_by_ids(order.clone())
            .await?;
        profiles.sort_by_key(|p| order.iter().position(|id| *id == p.id));

        let summaries = load_summaries(&txn, profiles).await?;

        txn.commit().await?;

        Ok(summaries)
    }
}
