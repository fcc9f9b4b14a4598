use super::*;

/// Tests the owner finds their own profile.
///
/// Expected: Ok(Some(Model))
#[tokio::test]
async fn finds_profile_for_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let profile = factory::create_profile(db, member.id).await?;

    let result = ProfileRepository::new(db)
        .find_owned(member.id, profile.id)
        .await?;

    assert_eq!(result, Some(profile));

    Ok(())
}

/// Tests another member's profile is hidden.
///
/// Expected: Ok(None)
#[tokio::test]
async fn hides_profile_from_other_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_member(db).await?;
    let other = factory::create_member(db).await?;
    let profile = factory::create_profile(db, owner.id).await?;

    let result = ProfileRepository::new(db)
        .find_owned(other.id, profile.id)
        .await?;

    assert!(result.is_none());

    Ok(())
}
