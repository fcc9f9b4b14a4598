use super::*;

/// Tests a new profile gets a six digit serial, the default features, and the
/// default image.
///
/// Expected: Ok(ProfileDetail) with five features, the first holding the name
#[tokio::test]
async fn creates_profile_with_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;

    let detail = ProfileService::new(db)
        .create_my_profile(member.id, create_params("Jay"))
        .await?;

    assert_eq!(detail.profile.member_id, member.id);
    assert_eq!(detail.profile.name, "Jay");
    assert!((100_000..=999_999).contains(&detail.profile.serial_number));

    let keys: Vec<&str> = detail.features.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, vec!["name", "mbti", "birthday", "residence", "hobby"]);
    assert_eq!(detail.features[0].value, "Jay");
    assert!(detail.features[1..].iter().all(|f| f.value.is_empty()));

    let image = detail.image.expect("default image created");
    assert_eq!(image.image_type, ProfileImageType::Default);
    assert!(image.image_url.is_none());

    Ok(())
}

/// Tests profiles get distinct serial numbers.
///
/// Expected: three distinct serial numbers
#[tokio::test]
async fn serial_numbers_are_distinct() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let service = ProfileService::new(db);

    let mut serials = Vec::new();
    for name in ["a", "b", "c"] {
        let detail = service.create_my_profile(member.id, create_params(name)).await?;
        serials.push(detail.profile.serial_number);
    }
    serials.sort();
    serials.dedup();

    assert_eq!(serials.len(), 3);

    Ok(())
}

/// Tests a member cannot exceed the profile limit.
///
/// Expected: Err(ProfileError::SizeOverflow) on the fourth profile, count unchanged
#[tokio::test]
async fn rejects_profile_over_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let service = ProfileService::new(db);

    for i in 0..MAX_PROFILE_COUNT {
        service
            .create_my_profile(member.id, create_params(&format!("profile {}", i)))
            .await?;
    }

    let result = service
        .create_my_profile(member.id, create_params("one too many"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ProfileErr(ProfileError::SizeOverflow { .. }))
    ));
    assert_eq!(
        service.get_my_profiles(member.id).await?.len() as u64,
        MAX_PROFILE_COUNT
    );

    Ok(())
}

/// Tests the limit is per member.
///
/// Expected: Ok for another member after the first reached the limit
#[tokio::test]
async fn limit_is_per_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let full = factory::create_member(db).await?;
    let other = factory::create_member(db).await?;
    for _ in 0..MAX_PROFILE_COUNT {
        factory::create_profile(db, full.id).await?;
    }

    let result = ProfileService::new(db)
        .create_my_profile(other.id, create_params("mine"))
        .await;

    assert!(result.is_ok());

    Ok(())
}
