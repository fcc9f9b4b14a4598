//! SeaORM entities for the AboutMe schema.
//!
//! Relations are declared so test schemas built from entities carry the same foreign
//! keys as the migrations. None of them cascade; owning services delete children
//! explicitly before their parent.

pub mod prelude;

pub mod alarm;
pub mod member;
pub mod member_profile;
pub mod plan;
pub mod profile;
pub mod profile_feature;
pub mod profile_image;
pub mod space;
pub mod space_image;
