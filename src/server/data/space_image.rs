use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

/// Repository for images displayed in a space.
pub struct SpaceImageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SpaceImageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all images of a space in insertion order.
    pub async fn find_by_space_id(
        &self,
        space_id: i32,
    ) -> Result<Vec<entity::space_image::Model>, DbErr> {
        entity::prelude::SpaceImage::find()
            .filter(entity::space_image::Column::SpaceId.eq(space_id))
            .order_by_asc(entity::space_image::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes all images of a space, returning the number of rows removed.
    pub async fn delete_by_space_id(&self, space_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::SpaceImage::delete_many()
            .filter(entity::space_image::Column::SpaceId.eq(space_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
