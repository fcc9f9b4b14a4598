use super::*;

/// Tests deleting children by space leaves other spaces untouched.
///
/// Expected: Ok(rows) counting only the deleted space's children
#[tokio::test]
async fn deletes_children_by_space() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_space_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, space) = factory::helpers::create_member_with_space(db).await?;
    let (_, other) = factory::helpers::create_member_with_space(db).await?;

    factory::space::create_space_image(db, space.id, "/uploads/a.png").await?;
    factory::space::create_space_image(db, space.id, "/uploads/b.png").await?;
    factory::space::create_plan(db, space.id, "plan").await?;
    factory::space::create_plan(db, other.id, "other plan").await?;

    let images = SpaceImageRepository::new(db)
        .delete_by_space_id(space.id)
        .await?;
    let plans = PlanRepository::new(db).delete_by_space_id(space.id).await?;

    assert_eq!(images, 2);
    assert_eq!(plans, 1);
    assert_eq!(
        PlanRepository::new(db).find_by_space_id(other.id).await?.len(),
        1
    );

    Ok(())
}

/// Tests deleting a space row.
///
/// Expected: Ok(1), then the member has no space
#[tokio::test]
async fn deletes_space() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_space_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, space) = factory::helpers::create_member_with_space(db).await?;

    let repo = SpaceRepository::new(db);
    let rows = repo.delete(space.id).await?;

    assert_eq!(rows, 1);
    assert!(repo.find_by_member_id(member.id).await?.is_none());

    Ok(())
}

/// Tests deleting a missing space affects nothing.
///
/// Expected: Ok(0)
#[tokio::test]
async fn deleting_missing_space_affects_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_space_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = SpaceRepository::new(db).delete(999).await?;

    assert_eq!(rows, 0);

    Ok(())
}
