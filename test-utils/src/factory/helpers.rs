//! Shared helper utilities for factory methods.

use std::sync::atomic::{AtomicU64, Ordering};

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to derive unique emails, nicknames, and serial numbers across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Creates a member who has joined a space.
///
/// # Returns
/// - `Ok((member, space))` - Created entities with default values
/// - `Err(DbErr)` - Database error during creation
pub async fn create_member_with_space(
    db: &DatabaseConnection,
) -> Result<(entity::member::Model, entity::space::Model), DbErr> {
    let member = crate::factory::member::create_member(db).await?;
    let space = crate::factory::space::create_space(db, member.id).await?;

    Ok((member, space))
}

/// Creates a profile with the five default features and a `DEFAULT` image, matching
/// what profile creation produces.
///
/// # Returns
/// - `Ok((profile, features, image))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_profile_with_children(
    db: &DatabaseConnection,
    member_id: i32,
) -> Result<
    (
        entity::profile::Model,
        Vec<entity::profile_feature::Model>,
        entity::profile_image::Model,
    ),
    DbErr,
> {
    let profile = crate::factory::profile::create_profile(db, member_id).await?;

    let mut features = Vec::new();
    for key in ["name", "mbti", "birthday", "residence", "hobby"] {
        let value = if key == "name" {
            profile.name.clone()
        } else {
            String::new()
        };
        features.push(crate::factory::profile::create_feature(db, profile.id, key, value).await?);
    }

    let image = crate::factory::profile::create_default_image(db, profile.id).await?;

    Ok((profile, features, image))
}
