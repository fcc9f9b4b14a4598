use super::*;

/// Tests a feature is only found on the profile it belongs to.
///
/// Expected: Some on its own profile, None on another
#[tokio::test]
async fn scopes_feature_to_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let profile = factory::create_profile(db, member.id).await?;
    let other = factory::create_profile(db, member.id).await?;
    let feature = factory::profile::create_feature(db, profile.id, "mbti", "ENFP").await?;

    let repo = ProfileFeatureRepository::new(db);

    assert_eq!(
        repo.find_on_profile(profile.id, feature.id).await?,
        Some(feature.clone())
    );
    assert!(repo.find_on_profile(other.id, feature.id).await?.is_none());

    Ok(())
}
