use super::*;

/// Tests storing profiles and listing the storage in insertion order.
///
/// Expected: true for new pairs and entries in the order added
#[tokio::test]
async fn stores_profiles_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let collector = factory::create_member(db).await?;
    let owner = factory::create_member(db).await?;
    let first = factory::create_profile(db, owner.id).await?;
    let second = factory::create_profile(db, owner.id).await?;

    let repo = MemberProfileRepository::new(db);
    assert!(repo.create_if_absent(collector.id, second.id).await?);
    assert!(repo.create_if_absent(collector.id, first.id).await?);

    let stored: Vec<i32> = repo
        .find_by_member_id(collector.id)
        .await?
        .into_iter()
        .map(|e| e.profile_id)
        .collect();
    assert_eq!(stored, vec![second.id, first.id]);
    assert!(repo.find_by_member_id(owner.id).await?.is_empty());

    Ok(())
}

/// Tests storing a pair that is already stored, as a concurrent share would.
///
/// Expected: Ok(false) and a single entry for the pair
#[tokio::test]
async fn stored_pair_is_skipped() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let collector = factory::create_member(db).await?;
    let owner = factory::create_member(db).await?;
    let profile = factory::create_profile(db, owner.id).await?;

    factory::profile::create_storage_entry(db, collector.id, profile.id).await?;

    let repo = MemberProfileRepository::new(db);
    assert!(!repo.create_if_absent(collector.id, profile.id).await?);
    assert_eq!(repo.find_by_member_id(collector.id).await?.len(), 1);

    Ok(())
}
