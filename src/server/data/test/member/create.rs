use super::*;

/// Tests inserting a member from an OAuth login.
///
/// Expected: Ok(Model) with the provider stored as "GOOGLE"
#[tokio::test]
async fn creates_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let member = repo
        .create(UpsertMemberParam {
            email: "someone@example.com".to_string(),
            social: Social::Google,
            name: Some("Someone".to_string()),
        })
        .await?;

    assert_eq!(member.email, "someone@example.com");
    assert_eq!(member.social, "GOOGLE");
    assert_eq!(member.name.as_deref(), Some("Someone"));

    let found = repo.find_by_id(member.id).await?;
    assert_eq!(found, Some(member));

    Ok(())
}

/// Tests the unique index on email rejects a second insert.
///
/// The member service relies on this error to resolve concurrent first logins.
///
/// Expected: Err(DbErr) classified as UniqueConstraintViolation
#[tokio::test]
async fn duplicate_email_is_unique_violation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let result = MemberRepository::new(db)
        .create(UpsertMemberParam {
            email: "taken@example.com".to_string(),
            social: Social::Google,
            name: None,
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
