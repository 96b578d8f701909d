use super::*;

/// Tests creating a category whose name is already in use.
///
/// Expected: Err(Conflict) and no second category stored
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = CategoryService::new(db);

    service.create(params("News", "news")).await?;
    let err = service.create(params("News", "other")).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(service.list().await?.len(), 1);

    Ok(())
}

/// Tests creating a category whose alias is already in use.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_duplicate_alias() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = CategoryService::new(db);

    service.create(params("News", "news")).await?;
    let err = service.create(params("Updates", "news")).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Conflict);

    Ok(())
}

/// Tests input validation before storage access.
///
/// Expected: Err(Validation) for a blank name and for an alias with spaces
#[tokio::test]
async fn rejects_invalid_input() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = CategoryService::new(db);

    let blank = service.create(params("  ", "blank")).await.unwrap_err();
    let spaced = service.create(params("Spaced", "has space")).await.unwrap_err();

    assert_eq!(blank.kind(), ErrorKind::ValidationFailed);
    assert_eq!(spaced.kind(), ErrorKind::ValidationFailed);
    assert!(service.list().await?.is_empty());

    Ok(())
}
