use super::*;
use crate::server::{service::member_profile::MemberProfileService, storage::ImageStorage};

/// Tests deleting a profile removes it from the owner and from other storages.
///
/// Expected: Ok(()), owner has no profiles and the collector's storage is empty
#[tokio::test]
async fn deletes_profile_and_children() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_member(db).await?;
    let collector = factory::create_member(db).await?;
    let (profile, _, _) = factory::helpers::create_profile_with_children(db, owner.id).await?;
    factory::profile::create_storage_entry(db, collector.id, profile.id).await?;

    let dir = tempfile::tempdir()?;
    let storage = ImageStorage::new(dir.path(), "/uploads");

    let service = ProfileService::new(db);
    service
        .delete_my_profile(owner.id, profile.id, &storage)
        .await?;

    assert!(service.get_my_profiles(owner.id).await?.is_empty());
    assert!(MemberProfileService::new(db)
        .get_my_storage(collector.id)
        .await?
        .is_empty());

    Ok(())
}

/// Tests a member cannot delete someone else's profile.
///
/// Expected: Err(ProfileError::NotFound) and the profile still exists
#[tokio::test]
async fn cannot_delete_other_members_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_member(db).await?;
    let other = factory::create_member(db).await?;
    let (profile, _, _) = factory::helpers::create_profile_with_children(db, owner.id).await?;

    let dir = tempfile::tempdir()?;
    let storage = ImageStorage::new(dir.path(), "/uploads");

    let service = ProfileService::new(db);
    let result = service
        .delete_my_profile(other.id, profile.id, &storage)
        .await;

    assert!(matches!(
        result,
        Err(AppError::ProfileErr(ProfileError::NotFound { .. }))
    ));
    assert_eq!(service.get_my_profiles(owner.id).await?.len(), 1);

    Ok(())
}

/// Tests deleting a profile with an uploaded image removes the file.
///
/// Expected: Ok(()) and the upload directory is empty
#[tokio::test]
async fn deleting_profile_removes_uploaded_file() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir()?;
    let storage = ImageStorage::new(dir.path(), "/uploads");

    let owner = factory::create_member(db).await?;
    let (profile, _, _) = factory::helpers::create_profile_with_children(db, owner.id).await?;

    let service = ProfileService::new(db);
    service
        .update_my_profile_image(
            owner.id,
            UpdateProfileImageParams {
                profile_id: profile.id,
                image_type: ProfileImageType::UserImage,
                image: Some(UploadedImage {
                    file_name: Some("me.jpg".to_string()),
                    content_type: Some("image/jpeg".to_string()),
                    bytes: axum::body::Bytes::from_static(b"jpeg"),
                }),
            },
            &storage,
        )
        .await?;
    assert_eq!(std::fs::read_dir(dir.path().join("profile"))?.count(), 1);

    service
        .delete_my_profile(owner.id, profile.id, &storage)
        .await?;

    assert_eq!(std::fs::read_dir(dir.path().join("profile"))?.count(), 0);

    Ok(())
}
