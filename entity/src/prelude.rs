pub use super::alarm::Entity as Alarm;
pub use super::member::Entity as Member;
pub use super::member_profile::Entity as MemberProfile;
pub use super::plan::Entity as Plan;
pub use super::profile::Entity as Profile;
pub use super::profile_feature::Entity as ProfileFeature;
pub use super::profile_image::Entity as ProfileImage;
pub use super::space::Entity as Space;
pub use super::space_image::Entity as SpaceImage;
