use super::*;

/// Tests creating a tag whose name is already in use.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = TagService::new(db);

    let params = CreateTagParams {
        name: "rust".to_string(),
        description: String::new(),
    };
    service.create(params.clone()).await?;

    let err = service.create(params).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Conflict);

    Ok(())
}

/// Tests reusing the name of a deleted tag.
///
/// Expected: Ok with a new tag
#[tokio::test]
async fn reuses_name_of_deleted_tag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = TagService::new(db);

    let params = CreateTagParams {
        name: "async".to_string(),
        description: String::new(),
    };
    let old = service.create(params.clone()).await?;
    service.delete(old.id).await?;

    let new = service.create(params).await?;

    assert_ne!(new.id, old.id);
    let ids: Vec<i32> = service.list().await?.into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![new.id]);

    Ok(())
}
