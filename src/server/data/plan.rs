use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

/// Repository for plans listed in a space.
pub struct PlanRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all plans of a space in insertion order.
    pub async fn find_by_space_id(&self, space_id: i32) -> Result<Vec<entity::plan::Model>, DbErr> {
        entity::prelude::Plan::find()
            .filter(entity::plan::Column::SpaceId.eq(space_id))
            .order_by_asc(entity::plan::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes all plans of a space, returning the number of rows removed.
    pub async fn delete_by_space_id(&self, space_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Plan::delete_many()
            .filter(entity::plan::Column::SpaceId.eq(space_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
