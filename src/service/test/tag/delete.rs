use super::*;

/// Tests deleting a tag attached to a live article.
///
/// Expected: Err(ReferentialIntegrity) until the article is deleted, then Ok
#[tokio::test]
async fn refuses_tag_on_live_article() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = TagService::new(db);

    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;
    let tag = factory::create_tag(db).await?;
    AssociationGraph::new(db)
        .append::<ArticleTags>(article.id, &[tag.id])
        .await?;

    let err = service.delete(tag.id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ReferentialIntegrityViolation);
    assert!(matches!(
        err,
        AppError::ReferentialIntegrity { ref relation, .. } if relation == "article (tag)"
    ));

    ArticleService::new(db).delete(article.id).await?;
    service.delete(tag.id).await?;

    assert!(service.list().await?.is_empty());

    Ok(())
}
