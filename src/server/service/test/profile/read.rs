use super::*;

/// Tests listing returns only the requester's profiles with their images.
///
/// Expected: Ok(Vec) with the two owned profiles in creation order
#[tokio::test]
async fn lists_own_profiles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let other = factory::create_member(db).await?;
    let (first, _, _) = factory::helpers::create_profile_with_children(db, member.id).await?;
    let (second, _, _) = factory::helpers::create_profile_with_children(db, member.id).await?;
    factory::helpers::create_profile_with_children(db, other.id).await?;

    let summaries = ProfileService::new(db).get_my_profiles(member.id).await?;

    let ids: Vec<i32> = summaries.iter().map(|s| s.profile.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert!(summaries.iter().all(|s| s.image.is_some()));

    Ok(())
}

/// Tests reading one profile returns its features and image.
///
/// Expected: Ok(ProfileDetail) with five features
#[tokio::test]
async fn reads_profile_detail() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let (profile, features, image) =
        factory::helpers::create_profile_with_children(db, member.id).await?;

    let detail = ProfileService::new(db)
        .get_my_profile(member.id, profile.id)
        .await?;

    assert_eq!(detail.profile.serial_number, profile.serial_number);
    assert_eq!(detail.features.len(), features.len());
    assert_eq!(detail.image.map(|i| i.id), Some(image.id));

    Ok(())
}

/// Tests another member's profile cannot be read.
///
/// Expected: Err(ProfileError::NotFound)
#[tokio::test]
async fn cannot_read_other_members_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_member(db).await?;
    let other = factory::create_member(db).await?;
    let profile = factory::create_profile(db, owner.id).await?;

    let result = ProfileService::new(db)
        .get_my_profile(other.id, profile.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::ProfileErr(ProfileError::NotFound { .. }))
    ));

    Ok(())
}
