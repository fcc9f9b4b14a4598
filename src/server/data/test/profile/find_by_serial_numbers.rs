use super::*;

/// Tests lookup by serial number skips unknown numbers.
///
/// Expected: Ok(Vec) with only the known profiles
#[tokio::test]
async fn skips_unknown_serial_numbers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let first = factory::profile::ProfileFactory::new(db, member.id)
        .serial_number(111_111)
        .build()
        .await?;
    let second = factory::profile::ProfileFactory::new(db, member.id)
        .serial_number(222_222)
        .build()
        .await?;

    let result = ProfileRepository::new(db)
        .find_by_serial_numbers(vec![222_222, 111_111, 999_999])
        .await?;

    let ids: Vec<i32> = result.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests an empty input never queries and returns nothing.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn empty_input_returns_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ProfileRepository::new(db)
        .find_by_serial_numbers(Vec::new())
        .await?;

    assert!(result.is_empty());

    Ok(())
}
