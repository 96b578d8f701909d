use super::*;

/// Tests a partial category update.
///
/// Verifies that only the fields present are written; an empty description is a
/// legitimate value and not treated as absent.
///
/// Expected: Ok with description cleared and name, alias and sort kept
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let original = factory::category::CategoryFactory::new(db)
        .description("Old description")
        .sort(3)
        .build()
        .await?;

    let updated = CategoryRepository::new(db)
        .update(
            original.id,
            UpdateCategoryParams {
                description: Some(String::new()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name, original.name);
    assert_eq!(updated.alias, original.alias);
    assert_eq!(updated.sort, 3);
    assert_eq!(updated.description, "");
    assert!(updated.updated_at >= original.updated_at);

    Ok(())
}

/// Tests updating a category that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CategoryRepository::new(db)
        .update(999999, UpdateCategoryParams::default())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
