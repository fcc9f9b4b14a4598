use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Member, Space};
///
/// let test = TestBuilder::new()
///     .with_table(Member)
///     .with_table(Space)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements executed in order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed after the tables.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys should be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index the entity derive cannot express, such as a composite unique key.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds the member profile storage table with its unique (member, profile) index.
    pub fn with_member_profile_table(self) -> Self {
        self.with_table(MemberProfile).with_index(
            Index::create()
                .name("idx_member_profile_unique")
                .table(MemberProfile)
                .col(entity::member_profile::Column::MemberId)
                .col(entity::member_profile::Column::ProfileId)
                .unique()
                .to_owned(),
        )
    }

    /// Adds the member table.
    pub fn with_member_tables(self) -> Self {
        self.with_table(Member)
    }

    /// Adds the tables required for space and alarm operations:
    /// Member, Space, SpaceImage, Plan, Alarm.
    pub fn with_space_tables(self) -> Self {
        self.with_member_tables()
            .with_table(Space)
            .with_table(SpaceImage)
            .with_table(Plan)
            .with_table(Alarm)
    }

    /// Adds the tables required for profile and profile storage operations:
    /// Member, Profile, ProfileFeature, ProfileImage, MemberProfile.
    pub fn with_profile_tables(self) -> Self {
        self.with_member_tables()
            .with_table(Profile)
            .with_table(ProfileFeature)
            .with_table(ProfileImage)
            .with_member_profile_table()
    }

    /// Adds every application table.
    ///
    /// Use this for router-level tests that may touch any endpoint.
    pub fn with_all_tables(self) -> Self {
        self.with_space_tables()
            .with_table(Profile)
            .with_table(ProfileFeature)
            .with_table(ProfileImage)
            .with_member_profile_table()
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`, then the added indexes.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}
