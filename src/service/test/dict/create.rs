use super::*;

/// Tests creating a dict under a parent.
///
/// Expected: Ok with the parent link stored
#[tokio::test]
async fn creates_child_under_parent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = DictService::new(db);

    let parent = service.create(params("region")).await?;
    let child = service
        .create(CreateDictParams {
            parent_id: Some(parent.id),
            ..params("region-north")
        })
        .await?;

    assert_eq!(child.parent_id, Some(parent.id));
    assert_eq!(child.image_id, None);

    Ok(())
}

/// Tests creating a dict under a parent that does not exist.
///
/// Expected: Err(NotFound) and nothing stored
#[tokio::test]
async fn rejects_missing_parent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = DictService::new(db);

    let err = service
        .create(CreateDictParams {
            parent_id: Some(999999),
            ..params("orphan")
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(service.list().await?.is_empty());

    Ok(())
}

/// Tests creating a dict with a code already in use.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_duplicate_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = DictService::new(db);

    service.create(params("color")).await?;
    let err = service
        .create(CreateDictParams {
            name: "Another name".to_string(),
            ..params("color")
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Conflict);

    Ok(())
}
