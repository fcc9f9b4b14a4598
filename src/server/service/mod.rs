//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing ownership, limits, and validation rules
//! - **Orchestration**: Coordinating repository calls, image storage, and the identity provider
//! - **Domain Models**: Converting entity models to domain models before returning
//! - **Transaction Management**: Running every operation inside one database transaction
//!
//! A transaction is opened with `begin()` and committed as the last step; returning
//! early with an error drops it, which rolls back. While a transaction is open only
//! the transaction handle is used for queries.

pub mod alarm;
pub mod auth;
pub mod member;
pub mod member_profile;
pub mod profile;
pub mod space;

#[cfg(test)]
mod test;
