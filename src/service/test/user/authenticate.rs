use super::*;

/// Tests authenticating with correct and incorrect passwords.
///
/// Expected: Ok(User) for the right password, Err(Validation) for a wrong one
#[tokio::test]
async fn verifies_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = UserService::new(db);

    let user = service.create(params("heidi", "10000000008")).await?;

    let authenticated = service.authenticate("heidi", "correct horse").await?;
    assert_eq!(authenticated.id, user.id);

    let err = service
        .authenticate("heidi", "battery staple")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValidationFailed);

    Ok(())
}

/// Tests authenticating a deleted or unknown user.
///
/// Expected: Err(NotFound) for both
#[tokio::test]
async fn fails_for_unknown_or_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = UserService::new(db);

    let user = service.create(params("ivan", "10000000009")).await?;
    service.delete(user.id).await?;

    let deleted = service
        .authenticate("ivan", "correct horse")
        .await
        .unwrap_err();
    let unknown = service
        .authenticate("nobody", "correct horse")
        .await
        .unwrap_err();

    assert_eq!(deleted.kind(), ErrorKind::NotFound);
    assert_eq!(unknown.kind(), ErrorKind::NotFound);

    Ok(())
}
