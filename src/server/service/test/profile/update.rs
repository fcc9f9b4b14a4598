use super::*;

/// Tests updating a feature value on an owned profile.
///
/// Expected: Ok(ProfileFeature) with the new value
#[tokio::test]
async fn updates_feature_value() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let (profile, features, _) =
        factory::helpers::create_profile_with_children(db, member.id).await?;
    let mbti = &features[1];

    let updated = ProfileService::new(db)
        .update_my_profile(
            member.id,
            UpdateFeatureParams {
                profile_id: profile.id,
                feature_id: mbti.id,
                feature_key: "mbti".to_string(),
                feature_value: "ISTJ".to_string(),
            },
        )
        .await?;

    assert_eq!(updated.id, mbti.id);
    assert_eq!(updated.value, "ISTJ");

    Ok(())
}

/// Tests a key that differs from the stored one only updates the value.
///
/// Expected: Ok(ProfileFeature) keeping the stored key
#[tokio::test]
async fn mismatched_key_keeps_stored_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let (profile, features, _) =
        factory::helpers::create_profile_with_children(db, member.id).await?;
    let hobby = &features[4];

    let updated = ProfileService::new(db)
        .update_my_profile(
            member.id,
            UpdateFeatureParams {
                profile_id: profile.id,
                feature_id: hobby.id,
                feature_key: "favorite_food".to_string(),
                feature_value: "noodles".to_string(),
            },
        )
        .await?;

    assert_eq!(updated.key, "hobby");
    assert_eq!(updated.value, "noodles");

    Ok(())
}

/// Tests a feature from another profile cannot be updated through this one.
///
/// Expected: Err(ProfileError::FeatureNotFound)
#[tokio::test]
async fn rejects_feature_of_other_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let (profile, _, _) = factory::helpers::create_profile_with_children(db, member.id).await?;
    let (_, other_features, _) =
        factory::helpers::create_profile_with_children(db, member.id).await?;

    let result = ProfileService::new(db)
        .update_my_profile(
            member.id,
            UpdateFeatureParams {
                profile_id: profile.id,
                feature_id: other_features[0].id,
                feature_key: "name".to_string(),
                feature_value: "x".to_string(),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::ProfileErr(ProfileError::FeatureNotFound { .. }))
    ));

    Ok(())
}
