use super::*;

/// Tests a profile is removed from every member's storage.
///
/// Expected: Ok(2) and both collectors' storages no longer hold it
#[tokio::test]
async fn removes_profile_from_all_storages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_member(db).await?;
    let first = factory::create_member(db).await?;
    let second = factory::create_member(db).await?;
    let profile = factory::create_profile(db, owner.id).await?;
    let kept = factory::create_profile(db, owner.id).await?;

    factory::profile::create_storage_entry(db, first.id, profile.id).await?;
    factory::profile::create_storage_entry(db, second.id, profile.id).await?;
    factory::profile::create_storage_entry(db, second.id, kept.id).await?;

    let repo = MemberProfileRepository::new(db);
    let rows = repo.delete_by_profile_id(profile.id).await?;

    assert_eq!(rows, 2);
    assert!(repo.find_by_member_id(first.id).await?.is_empty());
    assert_eq!(repo.find_by_member_id(second.id).await?.len(), 1);

    Ok(())
}
