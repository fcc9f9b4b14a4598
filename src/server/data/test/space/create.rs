use super::*;

/// Tests creating a space stores every field with the mood as its name.
///
/// Expected: Ok(Model) found again by member id
#[tokio::test]
async fn creates_space_for_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_space_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;

    let repo = SpaceRepository::new(db);
    let space = repo.create(member.id, join_params("cozy")).await?;

    assert_eq!(space.member_id, member.id);
    assert_eq!(space.nickname, "cozy");
    assert_eq!(space.character_type, 3);
    assert_eq!(space.room_type, 2);
    assert_eq!(space.mood, "EXCITED");

    let found = repo.find_by_member_id(member.id).await?;
    assert_eq!(found.map(|s| s.id), Some(space.id));

    Ok(())
}

/// Tests a member cannot hold two spaces.
///
/// Expected: Err(DbErr) from the unique index on member_id
#[tokio::test]
async fn second_space_for_member_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_space_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;

    let repo = SpaceRepository::new(db);
    repo.create(member.id, join_params("first")).await?;
    let result = repo.create(member.id, join_params("second")).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests a member without a space finds nothing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_space() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_space_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;

    let result = SpaceRepository::new(db).find_by_member_id(member.id).await?;

    assert!(result.is_none());

    Ok(())
}
