//! Database repository layer for all domain entities.
//!
//! This module contains one repository struct per table. Repositories use SeaORM entity
//! models and return them unchanged; conversion to domain models happens in the service
//! layer where stored enum values are parsed.
//!
//! Every repository is generic over `ConnectionTrait`, so the same repository runs
//! against the connection pool or inside a `DatabaseTransaction` opened by a service.

pub mod alarm;
pub mod member;
pub mod member_profile;
pub mod plan;
pub mod profile;
pub mod profile_feature;
pub mod profile_image;
pub mod space;
pub mod space_image;
