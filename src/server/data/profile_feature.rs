//! Profile feature data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

/// Repository providing database operations for profile features.
pub struct ProfileFeatureRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileFeatureRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts one feature row per key/value pair, in order.
    ///
    /// # Arguments
    /// - `profile_id` - Profile the features belong to
    /// - `features` - Key/value pairs to insert
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Inserted features in the order given
    /// - `Err(DbErr)` - Database error
    pub async fn create_many(
        &self,
        profile_id: i32,
        features: Vec<(String, String)>,
    ) -> Result<Vec<entity::profile_feature::Model>, DbErr> {
        let now = Utc::now();
        let mut created = Vec::with_capacity(features.len());

        for (key, value) in features {
            let feature = entity::profile_feature::ActiveModel {
                profile_id: ActiveValue::Set(profile_id),
                feature_key: ActiveValue::Set(key),
                feature_value: ActiveValue::Set(value),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            created.push(feature);
        }

        Ok(created)
    }

    /// Finds a feature only if it belongs to the given profile.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Feature exists on `profile_id`
    /// - `Ok(None)` - Feature does not exist or belongs to another profile
    /// - `Err(DbErr)` - Database error
    pub async fn find_on_profile(
        &self,
        profile_id: i32,
        feature_id: i32,
    ) -> Result<Option<entity::profile_feature::Model>, DbErr> {
        entity::prelude::ProfileFeature::find_by_id(feature_id)
            .filter(entity::profile_feature::Column::ProfileId.eq(profile_id))
            .one(self.db)
            .await
    }

    /// Gets all features of a profile in insertion order.
    pub async fn find_by_profile_id(
        &self,
        profile_id: i32,
    ) -> Result<Vec<entity::profile_feature::Model>, DbErr> {
        entity::prelude::ProfileFeature::find()
            .filter(entity::profile_feature::Column::ProfileId.eq(profile_id))
            .order_by_asc(entity::profile_feature::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces the value of an existing feature. The key is left unchanged.
    pub async fn update_value(
        &self,
        feature: entity::profile_feature::Model,
        value: String,
    ) -> Result<entity::profile_feature::Model, DbErr> {
        let mut active: entity::profile_feature::ActiveModel = feature.into();
        active.feature_value = ActiveValue::Set(value);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Deletes all features of a profile, returning the number of rows removed.
    pub async fn delete_by_profile_id(&self, profile_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ProfileFeature::delete_many()
            .filter(entity::profile_feature::Column::ProfileId.eq(profile_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
