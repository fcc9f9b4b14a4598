//! Profile image data repository for database operations.
//!
//! Each profile has exactly one image row, created as `DEFAULT` together with the
//! profile and updated in place afterwards.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::{model::profile::ProfileImageType, server::model::profile::image_type_as_str};

pub struct ProfileImageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileImageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the `DEFAULT` image with no URL for a new profile.
    pub async fn create_default(
        &self,
        profile_id: i32,
    ) -> Result<entity::profile_image::Model, DbErr> {
        let now = Utc::now();

        entity::profile_image::ActiveModel {
            profile_id: ActiveValue::Set(profile_id),
            profile_image_type: ActiveValue::Set(
                image_type_as_str(ProfileImageType::Default).to_string(),
            ),
            image_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds the image of a profile.
    pub async fn find_by_profile_id(
        &self,
        profile_id: i32,
    ) -> Result<Option<entity::profile_image::Model>, DbErr> {
        entity::prelude::ProfileImage::find()
            .filter(entity::profile_image::Column::ProfileId.eq(profile_id))
            .one(self.db)
            .await
    }

    /// Gets the images of several profiles at once.
    pub async fn find_by_profile_ids(
        &self,
        profile_ids: Vec<i32>,
    ) -> Result<Vec<entity::profile_image::Model>, DbErr> {
        if profile_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::ProfileImage::find()
            .filter(entity::profile_image::Column::ProfileId.is_in(profile_ids))
            .all(self.db)
            .await
    }

    /// Sets the image type and URL of an existing image row.
    ///
    /// # Arguments
    /// - `image` - Current image row
    /// - `image_type` - New image type
    /// - `image_url` - Public URL of the stored file, `None` to clear it
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated image row
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        image: entity::profile_image::Model,
        image_type: ProfileImageType,
        image_url: Option<String>,
    ) -> Result<entity::profile_image::Model, DbErr> {
        let mut active: entity::profile_image::ActiveModel = image.into();
        active.profile_image_type = ActiveValue::Set(image_type_as_str(image_type).to_string());
        active.image_url = ActiveValue::Set(image_url);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Deletes the image row of a profile.
    pub async fn delete_by_profile_id(&self, profile_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ProfileImage::delete_many()
            .filter(entity::profile_image::Column::ProfileId.eq(profile_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
