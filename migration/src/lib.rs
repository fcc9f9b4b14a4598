pub use sea_orm_migration::prelude::*;

mod m20260901_000001_create_member_table;
mod m20260901_000002_create_space_table;
mod m20260901_000003_create_space_image_table;
mod m20260901_000004_create_plan_table;
mod m20260902_000005_create_profile_table;
mod m20260902_000006_create_profile_feature_table;
mod m20260902_000007_create_profile_image_table;
mod m20260903_000008_create_member_profile_table;
mod m20260903_000009_create_alarm_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260901_000001_create_member_table::Migration),
            Box::new(m20260901_000002_create_space_table::Migration),
            Box::new(m20260901_000003_create_space_image_table::Migration),
            Box::new(m20260901_000004_create_plan_table::Migration),
            Box::new(m20260902_000005_create_profile_table::Migration),
            Box::new(m20260902_000006_create_profile_feature_table::Migration),
            Box::new(m20260902_000007_create_profile_image_table::Migration),
            Box::new(m20260903_000008_create_member_profile_table::Migration),
            Box::new(m20260903_000009_create_alarm_table::Migration),
        ]
    }
}
