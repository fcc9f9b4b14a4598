use super::*;

/// Tests alarms pointing at a space are removed for every recipient.
///
/// Expected: Ok(2) and no alarms left for that space
#[tokio::test]
async fn deletes_alarms_for_space() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_space_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, space) = factory::helpers::create_member_with_space(db).await?;
    let (_, other_space) = factory::helpers::create_member_with_space(db).await?;
    let first = factory::create_member(db).await?;
    let second = factory::create_member(db).await?;

    factory::space::create_alarm(db, first.id, space.id, "a").await?;
    factory::space::create_alarm(db, second.id, space.id, "b").await?;
    factory::space::create_alarm(db, second.id, other_space.id, "c").await?;

    let repo = AlarmRepository::new(db);
    let rows = repo.delete_by_space_id(space.id).await?;

    assert_eq!(rows, 2);
    assert!(repo.find_by_member_id(first.id).await?.is_empty());
    assert_eq!(repo.find_by_member_id(second.id).await?.len(), 1);

    Ok(())
}
