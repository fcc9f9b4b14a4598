//! Profile service: a member's own profiles, their features, and their image.

use std::collections::HashMap;

use rand::Rng;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::profile::ProfileImageType,
    server::{
        data::{
            member_profile::MemberProfileRepository, profile::ProfileRepository,
            profile_feature::ProfileFeatureRepository, profile_image::ProfileImageRepository,
        },
        error::{internal::InternalError, profile::ProfileError, AppError},
        model::profile::{
            CreateProfileParams, Profile, ProfileDetail, ProfileFeature, ProfileImage,
            ProfileSummary, UpdateFeatureParams, UpdateProfileImageParams, DEFAULT_FEATURE_KEYS,
            MAX_PROFILE_COUNT, NAME_FEATURE_KEY, SERIAL_NUMBER_MAX, SERIAL_NUMBER_MIN,
        },
        service::member::require_member,
        storage::ImageStorage,
    },
};

/// Attempts at drawing an unused serial number before giving up.
const SERIAL_NUMBER_ATTEMPTS: u32 = 10;

/// Storage sub directory for profile images.
const PROFILE_IMAGE_DIR: &str = "profile";

pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets summaries of every profile the member owns, oldest first.
    ///
    /// # Returns
    /// - `Ok(Vec<ProfileSummary>)` - Profiles with their images
    /// - `Err(AppError::MemberErr(_))` - Member does not exist
    pub async fn get_my_profiles(&self, member_id: i32) -> Result<Vec<ProfileSummary>, AppError> {
        let txn = self.db.begin().await?;
        require_member(&txn, member_id).await?;

        let profiles = ProfileRepository::new(&txn)
            .find_by_member_id(member_id)
            .await?;
        let summaries = load_summaries(&txn, profiles).await?;

        txn.commit().await?;

        Ok(summaries)
    }

    /// Gets one of the member's profiles with features and image.
    ///
    /// # Returns
    /// - `Ok(ProfileDetail)` - The profile
    /// - `Err(AppError::ProfileErr(NotFound))` - Missing or owned by another member
    pub async fn get_my_profile(
        &self,
        member_id: i32,
        profile_id: i32,
    ) -> Result<ProfileDetail, AppError> {
        let txn = self.db.begin().await?;

        let profile = require_owned_profile(&txn, member_id, profile_id).await?;
        let detail = load_detail(&txn, profile).await?;

        txn.commit().await?;

        Ok(detail)
    }

    /// Creates a profile with a fresh serial number, the default features, and the
    /// default image.
    ///
    /// # Returns
    /// - `Ok(ProfileDetail)` - The new profile
    /// - `Err(AppError::MemberErr(_))` - Member does not exist
    /// - `Err(AppError::ProfileErr(SizeOverflow))` - Member already owns
    ///   `MAX_PROFILE_COUNT` profiles
    /// - `Err(AppError::InternalErr(SerialNumberExhausted))` - No unused serial number found
    pub async fn create_my_profile(
        &self,
        member_id: i32,
        params: CreateProfileParams,
    ) -> Result<ProfileDetail, AppError> {
        let txn = self.db.begin().await?;
        require_member(&txn, member_id).await?;

        let profile_repo = ProfileRepository::new(&txn);
        if profile_repo.count_by_member_id(member_id).await? >= MAX_PROFILE_COUNT {
            return Err(ProfileError::SizeOverflow {
                member_id,
                max: MAX_PROFILE_COUNT,
            }
            .into());
        }

        let serial_number = allocate_serial_number(&profile_repo).await?;
        let profile = profile_repo
            .create(member_id, serial_number, params.name.clone())
            .await?;

        let default_features = DEFAULT_FEATURE_KEYS
            .iter()
            .map(|key| {
                let value = if *key == NAME_FEATURE_KEY {
                    params.name.clone()
                } else {
                    String::new()
                };
                (key.to_string(), value)
            })
            .collect();
        let features = ProfileFeatureRepository::new(&txn)
            .create_many(profile.id, default_features)
            .await?;
        let image = ProfileImageRepository::new(&txn)
            .create_default(profile.id)
            .await?;

        txn.commit().await?;

        Ok(ProfileDetail {
            profile: Profile::from_entity(profile),
            features: features
                .into_iter()
                .map(ProfileFeature::from_entity)
                .collect(),
            image: Some(ProfileImage::from_entity(image)?),
        })
    }

    /// Changes the value of one feature on one of the member's profiles.
    ///
    /// Only the value is written; the stored key is kept.
    ///
    /// # Returns
    /// - `Ok(ProfileFeature)` - The updated feature
    /// - `Err(AppError::ProfileErr(NotFound))` - Profile missing or not owned
    /// - `Err(AppError::ProfileErr(FeatureNotFound))` - Feature missing or on another profile
    pub async fn update_my_profile(
        &self,
        member_id: i32,
        params: UpdateFeatureParams,
    ) -> Result<ProfileFeature, AppError> {
        let txn = self.db.begin().await?;

        require_owned_profile(&txn, member_id, params.profile_id).await?;

        let feature_repo = ProfileFeatureRepository::new(&txn);
        let feature = feature_repo
            .find_on_profile(params.profile_id, params.feature_id)
            .await?
            .ok_or(ProfileError::FeatureNotFound {
                profile_id: params.profile_id,
                feature_id: params.feature_id,
            })?;

        if feature.feature_key != params.feature_key {
            tracing::debug!(
                "Feature {} key '{}' differs from requested '{}', updating value only",
                feature.id,
                feature.feature_key,
                params.feature_key
            );
        }

        let updated = feature_repo
            .update_value(feature, params.feature_value)
            .await?;

        txn.commit().await?;

        Ok(ProfileFeature::from_entity(updated))
    }

    /// Switches a profile between the default image and an uploaded one.
    ///
    /// `USER_IMAGE` requires a file, which is written through `storage` and its URL
    /// saved. `DEFAULT` clears the URL; a file sent along with it is ignored. The
    /// replaced file is removed after commit, and the new one if the update fails.
    ///
    /// # Returns
    /// - `Ok(ProfileImage)` - The updated image
    /// - `Err(AppError::ProfileErr(ImageRequired))` - `USER_IMAGE` without a file;
    ///   nothing is changed
    /// - `Err(AppError::ProfileErr(NotFound))` - Profile missing or not owned
    /// - `Err(AppError::IoErr(_))` - Failed to write the file
    pub async fn update_my_profile_image(
        &self,
        member_id: i32,
        params: UpdateProfileImageParams,
        storage: &ImageStorage,
    ) -> Result<ProfileImage, AppError> {
        if params.image_type == ProfileImageType::UserImage && params.image.is_none() {
            return Err(ProfileError::ImageRequired.into());
        }

        let txn = self.db.begin().await?;

        require_owned_profile(&txn, member_id, params.profile_id).await?;

        let image_repo = ProfileImageRepository::new(&txn);
        let current = match image_repo.find_by_profile_id(params.profile_id).await? {
            Some(image) => image,
            None => image_repo.create_default(params.profile_id).await?,
        };

        let previous_url = current.image_url.clone();

        let image_url = match (params.image_type, &params.image) {
            (ProfileImageType::UserImage, Some(file)) => {
                Some(storage.upload(PROFILE_IMAGE_DIR, file).await?)
            }
            _ => None,
        };

        let updated = match image_repo
            .update(current, params.image_type, image_url.clone())
            .await
        {
            Ok(updated) => updated,
            Err(err) => {
                remove_stored(storage, image_url).await;
                return Err(err.into());
            }
        };
        if let Err(err) = txn.commit().await {
            remove_stored(storage, image_url).await;
            return Err(err.into());
        }

        if previous_url != updated.image_url {
            remove_stored(storage, previous_url).await;
        }

        Ok(ProfileImage::from_entity(updated)?)
    }

    /// Deletes one of the member's profiles along with its features, its image, and
    /// every other member's stored copy. An uploaded image file is removed from
    /// `storage` once the rows are gone.
    ///
    /// # Returns
    /// - `Ok(())` - Profile and children removed
    /// - `Err(AppError::ProfileErr(NotFound))` - Profile missing or not owned
    pub async fn delete_my_profile(
        &self,
        member_id: i32,
        profile_id: i32,
        storage: &ImageStorage,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        require_owned_profile(&txn, member_id, profile_id).await?;

        ProfileFeatureRepository::new(&txn)
            .delete_by_profile_id(profile_id)
            .await?;
        let image_repo = ProfileImageRepository::new(&txn);
        let image_url = image_repo
            .find_by_profile_id(profile_id)
            .await?
            .and_then(|image| image.image_url);
        image_repo.delete_by_profile_id(profile_id).await?;
        MemberProfileRepository::new(&txn)
            .delete_by_profile_id(profile_id)
            .await?;
        ProfileRepository::new(&txn).delete(profile_id).await?;

        txn.commit().await?;

        remove_stored(storage, image_url).await;

        Ok(())
    }
}

/// Removes an uploaded file no committed row refers to any more.
async fn remove_stored(storage: &ImageStorage, url: Option<String>) {
    if let Some(url) = url {
        storage.remove(&url).await;
    }
}

/// Loads a profile owned by `member_id` or fails with `ProfileNotFound`.
async fn require_owned_profile<C: ConnectionTrait>(
    db: &C,
    member_id: i32,
    profile_id: i32,
) -> Result<entity::profile::Model, AppError> {
    ProfileRepository::new(db)
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

/// Draws random six digit serial numbers until one is unused.
async fn allocate_serial_number<C: ConnectionTrait>(
    repo: &ProfileRepository<'_, C>,
) -> Result<i32, AppError> {
    for _ in 0..SERIAL_NUMBER_ATTEMPTS {
        let candidate = rand::rng().random_range(SERIAL_NUMBER_MIN..=SERIAL_NUMBER_MAX);

        if !repo.serial_number_exists(candidate).await? {
            return Ok(candidate);
        }
    }

    Err(InternalError::SerialNumberExhausted(SERIAL_NUMBER_ATTEMPTS).into())
}

/// Attaches images to profiles, keeping the order of `profiles`.
pub(crate) async fn load_summaries<C: ConnectionTrait>(
    db: &C,
    profiles: Vec<entity::profile::Model>,
) -> Result<Vec<ProfileSummary>, AppError> {
    let profile_ids = profiles.iter().map(|p| p.id).collect();
    let mut images: HashMap<i32, entity::profile_image::Model> = ProfileImageRepository::new(db)
        .find_by_profile_ids(profile_ids)
        .await?
        .into_iter()
        .map(|image| (image.profile_id, image))
        .collect();

    profiles
        .into_iter()
        .map(|profile| -> Result<ProfileSummary, AppError> {
            let image = images
                .remove(&profile.id)
                .map(ProfileImage::from_entity)
                .transpose()?;

            Ok(ProfileSummary {
                profile: Profile::from_entity(profile),
                image,
            })
        })
        .collect()
}

async fn load_detail<C: ConnectionTrait>(
    db: &C,
    profile: entity::profile::Model,
) -> Result<ProfileDetail, AppError> {
    let features = ProfileFeatureRepository::new(db)
        .find_by_profile_id(profile.id)
        .await?;
    let image = ProfileImageRepository::new(db)
        .find_by_profile_id(profile.id)
        .await?
        .map(ProfileImage::from_entity)
        .transpose()?;

    Ok(ProfileDetail {
        profile: Profile::from_entity(profile),
        features: features
            .into_iter()
            .map(ProfileFeature::from_entity)
            .collect(),
        image,
    })
}
