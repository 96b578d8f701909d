use super::*;

/// Tests appending to an existing edge set.
///
/// Verifies that appending [A, B] to an owner that already has an edge to A adds
/// only the edge to B and never duplicates the edge to A.
///
/// Expected: Ok with edges exactly {A, B}
#[tokio::test]
async fn appends_without_duplicating_edges() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;
    let tag_a = factory::create_tag(db).await?;
    let tag_b = factory::create_tag(db).await?;

    let graph = AssociationGraph::new(db);
    graph.append::<ArticleTags>(article.id, &[tag_a.id]).await?;
    let applied = graph
        .append::<ArticleTags>(article.id, &[tag_a.id, tag_b.id])
        .await?;

    assert_eq!(applied, vec![tag_a.id, tag_b.id]);

    let mut expected = vec![tag_a.id, tag_b.id];
    expected.sort();
    assert_eq!(graph.targets::<ArticleTags>(article.id).await?, expected);

    let rows = entity::prelude::ArticleTag::find().count(db).await?;
    assert_eq!(rows, 2);

    Ok(())
}

/// Tests appending a list that contains an unknown target ID.
///
/// Verifies that the unknown ID is dropped silently while the existing ID is applied.
///
/// Expected: Ok with only the existing image linked
#[tokio::test]
async fn skips_missing_targets() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;
    let image = factory::create_image(db).await?;

    let graph = AssociationGraph::new(db);
    let applied = graph
        .append::<ArticleImages>(article.id, &[image.id, 999999])
        .await?;

    assert_eq!(applied, vec![image.id]);
    assert_eq!(graph.targets::<ArticleImages>(article.id).await?, vec![image.id]);

    Ok(())
}

/// Tests appending tombstoned targets.
///
/// Verifies that a tag that has been soft deleted counts as missing.
///
/// Expected: Ok with no edges written
#[tokio::test]
async fn skips_tombstoned_targets() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;
    let tag = factory::create_tag(db).await?;
    crate::data::live::tombstone::<entity::tag::Entity, _>(db, tag.id).await?;

    let graph = AssociationGraph::new(db);
    let applied = graph.append::<ArticleTags>(article.id, &[tag.id]).await?;

    assert!(applied.is_empty());
    assert!(graph.targets::<ArticleTags>(article.id).await?.is_empty());

    Ok(())
}

/// Tests appending the same ID several times in one call.
///
/// Expected: Ok with a single edge and the ID reported once
#[tokio::test]
async fn collapses_repeated_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;
    let tag = factory::create_tag(db).await?;

    let graph = AssociationGraph::new(db);
    let applied = graph
        .append::<ArticleTags>(article.id, &[tag.id, tag.id, tag.id])
        .await?;

    assert_eq!(applied, vec![tag.id]);
    assert_eq!(graph.targets::<ArticleTags>(article.id).await?, vec![tag.id]);

    Ok(())
}
