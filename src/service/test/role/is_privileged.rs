use super::*;

/// Tests the privilege flag of a super user and a regular user.
///
/// Expected: Ok(true) for the super user, Ok(false) for the regular one
#[tokio::test]
async fn reflects_super_flag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db)
        .is_super(true)
        .build()
        .await?;
    let editor = factory::create_user(db).await?;

    let gate = RoleGate::new(db);
    assert!(gate.is_privileged(admin.id).await?);
    assert!(!gate.is_privileged(editor.id).await?);

    Ok(())
}

/// Tests the privilege check for an unknown user.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let err = RoleGate::new(db).is_privileged(999999).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);

    Ok(())
}
