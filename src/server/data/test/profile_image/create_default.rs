use super::*;

/// Tests a new profile image starts as DEFAULT without a URL.
///
/// Expected: Ok(Model) with profile_image_type "DEFAULT" and image_url None
#[tokio::test]
async fn creates_default_image() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let profile = factory::create_profile(db, member.id).await?;

    let repo = ProfileImageRepository::new(db);
    let image = repo.create_default(profile.id).await?;

    assert_eq!(image.profile_image_type, "DEFAULT");
    assert!(image.image_url.is_none());
    assert_eq!(repo.find_by_profile_id(profile.id).await?, Some(image));

    Ok(())
}

/// Tests images for several profiles are fetched together.
///
/// Expected: Ok(Vec) with one image per requested profile
#[tokio::test]
async fn finds_images_for_profiles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let first = factory::create_profile(db, member.id).await?;
    let second = factory::create_profile(db, member.id).await?;
    let third = factory::create_profile(db, member.id).await?;
    for profile in [&first, &second, &third] {
        factory::profile::create_default_image(db, profile.id).await?;
    }

    let images = ProfileImageRepository::new(db)
        .find_by_profile_ids(vec![first.id, third.id])
        .await?;

    let mut profile_ids: Vec<i32> = images.iter().map(|i| i.profile_id).collect();
    profile_ids.sort();
    assert_eq!(profile_ids, vec![first.id, third.id]);

    Ok(())
}
