//! Request and response DTOs forming the HTTP wire contract.

pub mod alarm;
pub mod api;
pub mod member;
pub mod profile;
pub mod space;
