use thiserror::Error;

/// Errors raised while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the in-memory database, creating tables, or inserting
    /// fixture rows failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
