use super::*;

/// Tests images and plans are returned for their own space in insertion order.
///
/// Expected: Ok(Vec) with only the first space's children
#[tokio::test]
async fn returns_children_of_space_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_space_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, space) = factory::helpers::create_member_with_space(db).await?;
    let (_, other) = factory::helpers::create_member_with_space(db).await?;

    factory::space::create_space_image(db, space.id, "/uploads/a.png").await?;
    factory::space::create_space_image(db, space.id, "/uploads/b.png").await?;
    factory::space::create_space_image(db, other.id, "/uploads/c.png").await?;
    factory::space::create_plan(db, space.id, "water plants").await?;
    factory::space::create_plan(db, other.id, "read").await?;

    let images = SpaceImageRepository::new(db).find_by_space_id(space.id).await?;
    let plans = PlanRepository::new(db).find_by_space_id(space.id).await?;

    let urls: Vec<&str> = images.iter().map(|i| i.image_url.as_str()).collect();
    assert_eq!(urls, vec!["/uploads/a.png", "/uploads/b.png"]);
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].content, "water plants");
    assert!(!plans[0].is_completed);

    Ok(())
}
