//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer. Domain models
//! are converted from entity models at the repository boundary and transformed to DTOs
//! at the controller boundary. Stored enum columns (mood, social provider, profile
//! image type) are parsed here so services only ever see typed values.

pub mod alarm;
pub mod member;
pub mod profile;
pub mod space;
