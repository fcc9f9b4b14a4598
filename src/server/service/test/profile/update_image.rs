use axum::body::Bytes;

use super::*;
use crate::server::storage::ImageStorage;

fn png() -> UploadedImage {
    UploadedImage {
        file_name: Some("me.png".to_string()),
        content_type: Some("image/png".to_string()),
        bytes: Bytes::from_static(b"\x89PNG fake"),
    }
}

/// Tests uploading a user image stores the file and saves its URL.
///
/// Expected: Ok(ProfileImage) of USER_IMAGE whose URL points at a written file
#[tokio::test]
async fn uploads_user_image() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir()?;
    let storage = ImageStorage::new(dir.path(), "/uploads");

    let member = factory::create_member(db).await?;
    let (profile, _, _) = factory::helpers::create_profile_with_children(db, member.id).await?;

    let image = ProfileService::new(db)
        .update_my_profile_image(
            member.id,
            UpdateProfileImageParams {
                profile_id: profile.id,
                image_type: ProfileImageType::UserImage,
                image: Some(png()),
            },
            &storage,
        )
        .await?;

    assert_eq!(image.image_type, ProfileImageType::UserImage);
    let url = image.image_url.expect("url saved");
    assert!(url.starts_with("/uploads/profile/"));
    assert!(url.ends_with(".png"));

    let file_name = url.rsplit('/').next().unwrap();
    let stored = std::fs::read(dir.path().join("profile").join(file_name))?;
    assert_eq!(stored, b"\x89PNG fake");

    Ok(())
}

/// Tests USER_IMAGE without a file is rejected and leaves the image unchanged.
///
/// Expected: Err(ProfileError::ImageRequired), image still DEFAULT without URL
#[tokio::test]
async fn user_image_requires_file() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir()?;
    let storage = ImageStorage::new(dir.path(), "/uploads");

    let member = factory::create_member(db).await?;
    let (profile, _, _) = factory::helpers::create_profile_with_children(db, member.id).await?;

    let service = ProfileService::new(db);
    let result = service
        .update_my_profile_image(
            member.id,
            UpdateProfileImageParams {
                profile_id: profile.id,
                image_type: ProfileImageType::UserImage,
                image: None,
            },
            &storage,
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::ProfileErr(ProfileError::ImageRequired))
    ));

    let detail = service.get_my_profile(member.id, profile.id).await?;
    let image = detail.image.expect("image row exists");
    assert_eq!(image.image_type, ProfileImageType::Default);
    assert!(image.image_url.is_none());

    Ok(())
}

/// Tests switching back to DEFAULT clears the URL and ignores any file sent.
///
/// Expected: Ok(ProfileImage) of DEFAULT with no URL, the earlier upload removed and
/// nothing new written
#[tokio::test]
async fn default_clears_url() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir()?;
    let storage = ImageStorage::new(dir.path(), "/uploads");

    let member = factory::create_member(db).await?;
    let (profile, _, _) = factory::helpers::create_profile_with_children(db, member.id).await?;

    let service = ProfileService::new(db);
    service
        .update_my_profile_image(
            member.id,
            UpdateProfileImageParams {
                profile_id: profile.id,
                image_type: ProfileImageType::UserImage,
                image: Some(png()),
            },
            &storage,
        )
        .await?;

    let image = service
        .update_my_profile_image(
            member.id,
            UpdateProfileImageParams {
                profile_id: profile.id,
                image_type: ProfileImageType::Default,
                image: Some(png()),
            },
            &storage,
        )
        .await?;

    assert_eq!(image.image_type, ProfileImageType::Default);
    assert!(image.image_url.is_none());
    assert_eq!(std::fs::read_dir(dir.path().join("profile"))?.count(), 0);

    Ok(())
}

/// Tests uploading a second image replaces the first file.
///
/// Expected: only the file behind the latest URL remains
#[tokio::test]
async fn replacing_image_removes_previous_file() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir()?;
    let storage = ImageStorage::new(dir.path(), "/uploads");

    let member = factory::create_member(db).await?;
    let (profile, _, _) = factory::helpers::create_profile_with_children(db, member.id).await?;

    let service = ProfileService::new(db);
    let mut urls = Vec::new();
    for _ in 0..2 {
        let image = service
            .update_my_profile_image(
                member.id,
                UpdateProfileImageParams {
                    profile_id: profile.id,
                    image_type: ProfileImageType::UserImage,
                    image: Some(png()),
                },
                &storage,
            )
            .await?;
        urls.push(image.image_url.expect("url saved"));
    }

    let remaining: Vec<String> = std::fs::read_dir(dir.path().join("profile"))?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<Result<_, _>>()?;
    let latest = urls[1].rsplit('/').next().unwrap();
    assert_eq!(remaining, vec![latest.to_string()]);

    Ok(())
}

/// Tests another member's profile image cannot be changed.
///
/// Expected: Err(ProfileError::NotFound)
#[tokio::test]
async fn rejects_other_members_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir()?;
    let storage = ImageStorage::new(dir.path(), "/uploads");

    let owner = factory::create_member(db).await?;
    let other = factory::create_member(db).await?;
    let (profile, _, _) = factory::helpers::create_profile_with_children(db, owner.id).await?;

    let result = ProfileService::new(db)
        .update_my_profile_image(
            other.id,
            UpdateProfileImageParams {
                profile_id: profile.id,
                image_type: ProfileImageType::Default,
                image: None,
            },
            &storage,
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::ProfileErr(ProfileError::NotFound { .. }))
    ));

    Ok(())
}
