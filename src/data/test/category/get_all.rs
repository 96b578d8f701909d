use super::*;

/// Tests listing order of categories.
///
/// Expected: Ok with higher sort first, creation order within equal sort
#[tokio::test]
async fn orders_by_sort_then_creation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let low = factory::category::CategoryFactory::new(db)
        .sort(1)
        .build()
        .await?;
    let high = factory::category::CategoryFactory::new(db)
        .sort(10)
        .build()
        .await?;
    let low_later = factory::category::CategoryFactory::new(db)
        .sort(1)
        .build()
        .await?;

    let ids: Vec<i32> = CategoryRepository::new(db)
        .get_all()
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();

    assert_eq!(ids, vec![high.id, low.id, low_later.id]);

    Ok(())
}

/// Tests that tombstoned categories are not listed.
///
/// Expected: Ok with only the live category
#[tokio::test]
async fn skips_tombstoned_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let kept = factory::create_category(db).await?;
    let gone = factory::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    repo.soft_delete(gone.id).await?;

    let categories = repo.get_all().await?;
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].id, kept.id);

    Ok(())
}
