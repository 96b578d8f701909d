use super::*;

/// Tests creating users with a taken username or a taken phone number.
///
/// Expected: Err(Conflict) for both, with only the first user stored
#[tokio::test]
async fn rejects_taken_username_and_phone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = UserService::new(db);

    service.create(params("alice", "10000000001")).await?;

    let username = service
        .create(params("alice", "10000000002"))
        .await
        .unwrap_err();
    let phone = service
        .create(params("bob", "10000000001"))
        .await
        .unwrap_err();

    assert_eq!(username.kind(), ErrorKind::Conflict);
    assert_eq!(phone.kind(), ErrorKind::Conflict);
    assert_eq!(service.list().await?.len(), 1);

    Ok(())
}

/// Tests creating a user with an avatar.
///
/// Expected: Ok with the avatar linked, Err(NotFound) for a missing image
#[tokio::test]
async fn links_existing_avatar_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = UserService::new(db);

    let image = factory::create_image(db).await?;

    let user = service
        .create(CreateUserParams {
            image_id: Some(image.id),
            ..params("carol", "10000000003")
        })
        .await?;
    assert_eq!(user.image_id, Some(image.id));

    let err = service
        .create(CreateUserParams {
            image_id: Some(999999),
            ..params("dave", "10000000004")
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(service.list().await?.len(), 1);

    Ok(())
}
