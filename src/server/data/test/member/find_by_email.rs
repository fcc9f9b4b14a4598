use super::*;

/// Tests finding a member by email.
///
/// Expected: Ok(Some(Model))
#[tokio::test]
async fn finds_existing_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db)
        .email("found@example.com")
        .build()
        .await?;

    let result = MemberRepository::new(db)
        .find_by_email("found@example.com")
        .await?;

    assert_eq!(result.map(|m| m.id), Some(member.id));

    Ok(())
}

/// Tests an unknown email finds nothing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_member(db).await?;

    let result = MemberRepository::new(db)
        .find_by_email("nobody@example.com")
        .await?;

    assert!(result.is_none());

    Ok(())
}
