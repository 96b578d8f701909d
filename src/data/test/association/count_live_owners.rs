use super::*;

/// Tests counting join-row owners that are still live.
///
/// Verifies that an edge from a tombstoned article is not counted.
///
/// Expected: Ok with the count dropping from 2 to 1
#[tokio::test]
async fn excludes_tombstoned_owners() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, first) = factory::helpers::create_article_with_dependencies(db).await?;
    let second = factory::create_article(db, category.id, user.id).await?;
    let image = factory::create_image(db).await?;

    let graph = AssociationGraph::new(db);
    graph.append::<ArticleImages>(first.id, &[image.id]).await?;
    graph.append::<ArticleImages>(second.id, &[image.id]).await?;

    assert_eq!(graph.count_live_owners::<ArticleImages>(image.id).await?, 2);

    crate::data::live::tombstone::<entity::article::Entity, _>(db, first.id).await?;

    assert_eq!(graph.count_live_owners::<ArticleImages>(image.id).await?, 1);
    // Join rows of the tombstoned article are retained
    assert_eq!(graph.targets::<ArticleImages>(first.id).await?, vec![image.id]);

    Ok(())
}
