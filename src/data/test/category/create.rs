use super::*;

/// Tests creating a category through the repository.
///
/// Expected: Ok with all fields stored
#[tokio::test]
async fn creates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo
        .create(CreateCategoryParams {
            name: "News".to_string(),
            alias: "news".to_string(),
            description: "Company news".to_string(),
            sort: 5,
        })
        .await?;

    assert_eq!(category.name, "News");
    assert_eq!(category.alias, "news");
    assert_eq!(category.sort, 5);

    let fetched = repo.get_by_alias("news").await?;
    assert_eq!(fetched.map(|c| c.id), Some(category.id));

    Ok(())
}

/// Tests the live-row unique index on category names.
///
/// Verifies that a duplicate insert that bypasses the service checks is still
/// rejected by storage as a unique constraint violation.
///
/// Expected: Err with SqlErr::UniqueConstraintViolation
#[tokio::test]
async fn storage_rejects_duplicate_live_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::CategoryFactory::new(db)
        .name("Duplicate")
        .build()
        .await?;

    let result = CategoryRepository::new(db)
        .create(CreateCategoryParams {
            name: "Duplicate".to_string(),
            alias: "another-alias".to_string(),
            ..Default::default()
        })
        .await;

    let err = result.expect_err("duplicate name must be rejected");
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests reusing the name of a tombstoned category.
///
/// Expected: Ok, tombstoned rows do not hold on to unique values
#[tokio::test]
async fn reuses_name_of_tombstoned_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let old = factory::category::CategoryFactory::new(db)
        .name("Reused")
        .alias("reused")
        .build()
        .await?;
    assert!(repo.soft_delete(old.id).await?);

    let new = repo
        .create(CreateCategoryParams {
            name: "Reused".to_string(),
            alias: "reused".to_string(),
            ..Default::default()
        })
        .await?;

    assert_ne!(new.id, old.id);
    assert!(repo.get_by_id(old.id).await?.is_none());

    Ok(())
}
