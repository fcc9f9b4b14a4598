//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` convenience
//! function for quick default creation. Parents must exist before children are
//! created; foreign keys are enforced by the in-memory database.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let member = factory::create_member(db).await?;
//! let space = factory::space::SpaceFactory::new(db, member.id)
//!     .nickname("cozy")
//!     .build()
//!     .await?;
//! let (profile, features, image) =
//!     factory::helpers::create_profile_with_children(db, member.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `member` - Members
//! - `space` - Spaces, space images, plans, and alarms
//! - `profile` - Profiles, features, images, and storage entries
//! - `helpers` - Unique id counter and multi-entity shortcuts

pub mod helpers;
pub mod member;
pub mod profile;
pub mod space;

pub use member::create_member;
pub use profile::create_profile;
pub use space::create_space;
