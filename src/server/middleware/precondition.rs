//! Existence and ownership checks run before a handler calls its service.
//!
//! Each check returns the typed domain error a client should see when a path or body
//! references something the requester may not touch.

use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{profile::ProfileRepository, profile_feature::ProfileFeatureRepository},
    error::{profile::ProfileError, AppError},
};

pub struct PreconditionGuard<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PreconditionGuard<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Requires the profile to exist and belong to the requester.
    ///
    /// Profiles owned by other members are reported as not found so their existence
    /// is not revealed.
    ///
    /// # Returns
    /// - `Ok(Model)` - The requester's profile
    /// - `Err(AppError::ProfileErr(ProfileError::NotFound))` - Missing or not owned
    /// - `Err(AppError::DbErr(_))` - Database error
    pub async fn require_my_profile(
        &self,
        member_id: i32,
        profile_id: i32,
    ) -> Result<entity::profile::Model, AppError> {
        ProfileRepository::new(self.db)
            .find_owned(member_id, profile_id)
            .await?
            .ok_or_else(|| {
                ProfileError::NotFound {
                    member_id,
                    profile_id,
                }
                .into()
            })
    }

    /// Requires the feature to exist on the profile.
    pub async fn require_feature(&self, profile_id: i32, feature_id: i32) -> Result<(), AppError> {
        let feature = ProfileFeatureRepository::new(self.db)
            .find_on_profile(profile_id, feature_id)
            .await?;

        if feature.is_none() {
            return Err(ProfileError::FeatureNotFound {
                profile_id,
                feature_id,
            }
            .into());
        }

        Ok(())
    }

    /// Requires a non-empty list whose serial numbers all reference existing profiles.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Referenced profiles, duplicates collapsed
    /// - `Err(AppError::BadRequest)` - The list is empty
    /// - `Err(AppError::ProfileErr(ProfileError::SerialNumberNotFound))` - First serial
    ///   number without a profile
    /// - `Err(AppError::DbErr(_))` - Database error
    pub async fn require_profiles_by_serial_numbers(
        &self,
        serial_numbers: &[i32],
    ) -> Result<Vec<entity::profile::Model>, AppError> {
        if serial_numbers.is_empty() {
            return Err(AppError::BadRequest(
                "profile_serial_numbers must not be empty".to_string(),
            ));
        }

        let profiles = ProfileRepository::new(self.db)
            .find_by_serial_numbers(serial_numbers.to_vec())
            .await?;

        let found: HashSet<i32> = profiles.iter().map(|p| p.serial_number).collect();
        if let Some(missing) = serial_numbers.iter().find(|s| !found.contains(s)) {
            return Err(ProfileError::SerialNumberNotFound(*missing).into());
        }

        Ok(profiles)
    }
}
