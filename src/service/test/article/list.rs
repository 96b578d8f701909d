use super::*;

/// Tests the page counts over a filtered set of 25 articles.
///
/// Expected: Ok with total 25, 3 pages and 5 items on the last page
#[tokio::test]
async fn computes_page_counts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ArticleService::new(db);

    let user = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    for _ in 0..25 {
        factory::create_article(db, category.id, user.id).await?;
    }

    let first = service
        .list(ArticleFilter::default(), PageRequest::new(1, 10))
        .await?;
    let last = service
        .list(ArticleFilter::default(), PageRequest::new(3, 10))
        .await?;
    let beyond = service
        .list(ArticleFilter::default(), PageRequest::new(4, 10))
        .await?;

    assert_eq!(first.total, 25);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.items.len(), 10);
    assert_eq!(last.items.len(), 5);
    assert_eq!(last.page, 3);
    assert!(beyond.items.is_empty());
    assert_eq!(beyond.total, 25);

    Ok(())
}

/// Tests that listed articles carry their tag IDs.
///
/// Expected: Ok with each article's own tags
#[tokio::test]
async fn includes_relations() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ArticleService::new(db);

    let user = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let tag = factory::create_tag(db).await?;
    let tagged = service
        .create(
            user.id,
            CreateArticleParams {
                tag_ids: vec![tag.id],
                ..params("Tagged", category.id)
            },
        )
        .await?;
    let plain = service.create(user.id, params("Plain", category.id)).await?;

    let page = service
        .list(ArticleFilter::default(), PageRequest::new(1, 10))
        .await?;

    for item in &page.items {
        if item.article.id == tagged.article.id {
            assert_eq!(item.tag_ids, vec![tag.id]);
        } else {
            assert_eq!(item.article.id, plain.article.id);
            assert!(item.tag_ids.is_empty());
        }
    }
    assert_eq!(page.items.len(), 2);

    Ok(())
}

/// Tests listing with an out-of-range page window.
///
/// Expected: Err(Validation) for page 0, page size 0, page size above the maximum and a
/// page whose offset overflows
#[tokio::test]
async fn rejects_invalid_window() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ArticleService::new(db);

    for request in [
        PageRequest::new(0, 10),
        PageRequest::new(1, 0),
        PageRequest::new(1, 101),
        PageRequest::new(u64::MAX, 100),
    ] {
        let err = service
            .list(ArticleFilter::default(), request)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValidationFailed);
    }

    Ok(())
}
