use super::*;

/// Tests alarms are created unread and listed per recipient in insertion order.
///
/// Expected: Ok(Vec) with the recipient's two alarms
#[tokio::test]
async fn lists_alarms_for_recipient() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_space_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, first_space) = factory::helpers::create_member_with_space(db).await?;
    let (_, second_space) = factory::helpers::create_member_with_space(db).await?;
    let recipient = factory::create_member(db).await?;
    let bystander = factory::create_member(db).await?;

    let repo = AlarmRepository::new(db);
    let first = repo
        .create(recipient.id, first_space.id, "first".to_string())
        .await?;
    repo.create(recipient.id, second_space.id, "second".to_string())
        .await?;
    repo.create(bystander.id, first_space.id, "elsewhere".to_string())
        .await?;

    assert!(!first.is_read);

    let alarms = repo.find_by_member_id(recipient.id).await?;
    let contents: Vec<&str> = alarms.iter().map(|a| a.content.as_str()).collect();
    assert_eq!(contents, vec!["first", "second"]);

    Ok(())
}
