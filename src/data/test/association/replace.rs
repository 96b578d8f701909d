use super::*;

/// Tests replacing an edge set with an overlapping list.
///
/// Verifies that given edges {A, B}, replacing with [B, C] removes A, keeps B and
/// adds C.
///
/// Expected: Ok with edges exactly {B, C}
#[tokio::test]
async fn replaces_edge_set_exactly() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;
    let a = factory::create_image(db).await?;
    let b = factory::create_image(db).await?;
    let c = factory::create_image(db).await?;

    let graph = AssociationGraph::new(db);
    graph.append::<ArticleImages>(article.id, &[a.id, b.id]).await?;
    graph.replace::<ArticleImages>(article.id, &[b.id, c.id]).await?;

    let mut expected = vec![b.id, c.id];
    expected.sort();
    assert_eq!(graph.targets::<ArticleImages>(article.id).await?, expected);

    Ok(())
}

/// Tests replacing with an empty list.
///
/// Expected: Ok with every edge of the owner removed
#[tokio::test]
async fn empty_list_clears_edges() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;
    let tag = factory::create_tag(db).await?;

    let graph = AssociationGraph::new(db);
    graph.append::<ArticleTags>(article.id, &[tag.id]).await?;
    let applied = graph.replace::<ArticleTags>(article.id, &[]).await?;

    assert!(applied.is_empty());
    assert!(graph.targets::<ArticleTags>(article.id).await?.is_empty());

    Ok(())
}

/// Tests replacing with a list containing an unknown ID.
///
/// Verifies the skip-on-missing policy also applies to replace.
///
/// Expected: Ok with only the live tag linked
#[tokio::test]
async fn replace_skips_missing_targets() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;
    let tag = factory::create_tag(db).await?;

    let graph = AssociationGraph::new(db);
    let applied = graph
        .replace::<ArticleTags>(article.id, &[999999, tag.id])
        .await?;

    assert_eq!(applied, vec![tag.id]);
    assert_eq!(graph.targets::<ArticleTags>(article.id).await?, vec![tag.id]);

    Ok(())
}

/// Tests that replacing one owner's edges leaves other owners alone.
///
/// Expected: Ok with the second article's edges unchanged
#[tokio::test]
async fn leaves_other_owners_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, first) = factory::helpers::create_article_with_dependencies(db).await?;
    let second = factory::create_article(db, category.id, user.id).await?;
    let tag = factory::create_tag(db).await?;

    let graph = AssociationGraph::new(db);
    graph.append::<ArticleTags>(first.id, &[tag.id]).await?;
    graph.append::<ArticleTags>(second.id, &[tag.id]).await?;
    graph.replace::<ArticleTags>(first.id, &[]).await?;

    assert_eq!(graph.targets::<ArticleTags>(second.id).await?, vec![tag.id]);

    Ok(())
}
