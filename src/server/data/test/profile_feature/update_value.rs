use super::*;

/// Tests updating a feature changes the value and keeps the key.
///
/// Expected: Ok(Model) with the new value and the original key
#[tokio::test]
async fn updates_value_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let profile = factory::create_profile(db, member.id).await?;
    let feature = factory::profile::create_feature(db, profile.id, "residence", "").await?;

    let updated = ProfileFeatureRepository::new(db)
        .update_value(feature.clone(), "Seoul".to_string())
        .await?;

    assert_eq!(updated.id, feature.id);
    assert_eq!(updated.feature_key, "residence");
    assert_eq!(updated.feature_value, "Seoul");

    Ok(())
}

/// Tests deleting features of one profile leaves other profiles intact.
///
/// Expected: Ok(2) and the other profile keeps its feature
#[tokio::test]
async fn deletes_features_by_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let profile = factory::create_profile(db, member.id).await?;
    let other = factory::create_profile(db, member.id).await?;
    factory::profile::create_feature(db, profile.id, "name", "a").await?;
    factory::profile::create_feature(db, profile.id, "mbti", "b").await?;
    factory::profile::create_feature(db, other.id, "name", "c").await?;

    let repo = ProfileFeatureRepository::new(db);
    let rows = repo.delete_by_profile_id(profile.id).await?;

    assert_eq!(rows, 2);
    assert_eq!(repo.find_by_profile_id(other.id).await?.len(), 1);

    Ok(())
}
