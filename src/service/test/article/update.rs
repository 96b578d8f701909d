use super::*;

/// Tests the difference between absent and empty edge lists on update.
///
/// Verifies that an absent tag list keeps the tags, a present list replaces them and
/// an empty list clears them.
///
/// Expected: Ok with tag IDs following each update
#[tokio::test]
async fn replaces_present_edge_lists_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ArticleService::new(db);

    let user = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let a = factory::create_tag(db).await?;
    let b = factory::create_tag(db).await?;
    let c = factory::create_tag(db).await?;

    let article = service
        .create(
            user.id,
            CreateArticleParams {
                tag_ids: vec![a.id, b.id],
                ..params("Edges", category.id)
            },
        )
        .await?;
    let id = article.article.id;

    let untouched = service
        .update(
            id,
            UpdateArticleParams {
                title: Some("Edges renamed".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(untouched.article.title, "Edges renamed");
    assert_eq!(untouched.tag_ids, vec![a.id, b.id]);

    let replaced = service
        .update(
            id,
            UpdateArticleParams {
                tag_ids: Some(vec![b.id, c.id]),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(replaced.tag_ids, vec![b.id, c.id]);

    let cleared = service
        .update(
            id,
            UpdateArticleParams {
                tag_ids: Some(Vec::new()),
                ..Default::default()
            },
        )
        .await?;
    assert!(cleared.tag_ids.is_empty());

    Ok(())
}

/// Tests moving an article to another category and publishing it.
///
/// Expected: Ok with the new category and status
#[tokio::test]
async fn moves_category_and_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ArticleService::new(db);

    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;
    let target = factory::create_category(db).await?;

    let updated = service
        .update(
            article.id,
            UpdateArticleParams {
                category_id: Some(target.id),
                status: Some(ArticleStatus::Published),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.article.category_id, target.id);
    assert_eq!(updated.article.status, ArticleStatus::Published);

    Ok(())
}

/// Tests moving an article to a category that does not exist.
///
/// Expected: Err(NotFound) with the article left in its category
#[tokio::test]
async fn rejects_missing_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ArticleService::new(db);

    let (_, category, article) = factory::helpers::create_article_with_dependencies(db).await?;

    let err = service
        .update(
            article.id,
            UpdateArticleParams {
                category_id: Some(999999),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(
        service.get_by_id(article.id).await?.article.category_id,
        category.id
    );

    Ok(())
}

/// Tests renaming an article to the title of another live article.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_title_of_other_article() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ArticleService::new(db);

    let user = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    service.create(user.id, params("First", category.id)).await?;
    let second = service.create(user.id, params("Second", category.id)).await?;

    let err = service
        .update(
            second.article.id,
            UpdateArticleParams {
                title: Some("First".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Conflict);

    Ok(())
}
