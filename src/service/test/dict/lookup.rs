use super::*;

/// Tests listing the children of a dict by code.
///
/// Expected: Found with live children, NoChildren for a leaf, NotFound for an unknown code
#[tokio::test]
async fn resolves_sub_dicts_by_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = DictService::new(db);

    let parent = factory::dict::DictFactory::new(db)
        .code("size")
        .build()
        .await?;
    let small = factory::dict::DictFactory::new(db)
        .code("size-s")
        .parent_id(parent.id)
        .build()
        .await?;
    let large = factory::dict::DictFactory::new(db)
        .code("size-l")
        .parent_id(parent.id)
        .build()
        .await?;
    let gone = factory::create_child_dict(db, parent.id).await?;
    service.delete(gone.id).await?;

    match service.sub_dicts_by_code("size").await? {
        SubDicts::Found(children) => {
            let ids: Vec<i32> = children.iter().map(|d| d.id).collect();
            assert_eq!(ids, vec![small.id, large.id]);
        }
        SubDicts::NoChildren => panic!("expected children of 'size'"),
    }

    assert_eq!(
        service.sub_dicts_by_code("size-s").await?,
        SubDicts::NoChildren
    );

    let err = service.sub_dicts_by_code("missing").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    Ok(())
}

/// Tests reading the extra payload by code.
///
/// Expected: Ok with the stored payload, Err(NotFound) for an unknown code
#[tokio::test]
async fn reads_extra_by_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = DictService::new(db);

    factory::dict::DictFactory::new(db)
        .code("site")
        .extra("{\"title\":\"Blog\"}")
        .build()
        .await?;

    assert_eq!(service.extra_by_code("site").await?, "{\"title\":\"Blog\"}");

    let err = service.extra_by_code("absent").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    Ok(())
}
