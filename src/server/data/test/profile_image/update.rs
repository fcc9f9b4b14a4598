use super::*;

/// Tests switching to an uploaded image and back to the default.
///
/// Expected: USER_IMAGE with URL, then DEFAULT with the URL cleared
#[tokio::test]
async fn switches_image_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let profile = factory::create_profile(db, member.id).await?;
    let image = factory::profile::create_default_image(db, profile.id).await?;

    let repo = ProfileImageRepository::new(db);
    let uploaded = repo
        .update(
            image,
            ProfileImageType::UserImage,
            Some("/uploads/profile/1.png".to_string()),
        )
        .await?;

    assert_eq!(uploaded.profile_image_type, "USER_IMAGE");
    assert_eq!(uploaded.image_url.as_deref(), Some("/uploads/profile/1.png"));

    let reset = repo
        .update(uploaded, ProfileImageType::Default, None)
        .await?;

    assert_eq!(reset.profile_image_type, "DEFAULT");
    assert!(reset.image_url.is_none());

    Ok(())
}
