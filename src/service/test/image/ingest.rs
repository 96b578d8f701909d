use super::*;

/// Tests ingesting the same bytes twice.
///
/// Verifies that the second ingest resolves to the first record without writing a
/// second blob or catalog row.
///
/// Expected: Ok with one blob, one record and `is_new` false on the second call
#[tokio::test]
async fn ingesting_identical_bytes_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_blob_dir()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let blobs = BlobStore::new(test.blob_dir.as_ref().unwrap().path());
    let service = ImageService::new(db, &blobs);

    let first = service.ingest(png("cat.png", b"same pixels")).await?;
    let second = service.ingest(png("copy-of-cat.png", b"same pixels")).await?;

    assert!(first.is_new);
    assert!(!second.is_new);
    assert_eq!(first.image.id, second.image.id);
    assert_eq!(second.image.title, "cat.png");
    assert_eq!(service.list().await?.len(), 1);
    assert_eq!(blob_count(&blobs).await, 1);

    let stored = tokio::fs::read(service.blob_path(&first.image)).await.unwrap();
    assert_eq!(stored, b"same pixels");

    Ok(())
}

/// Tests ingesting two different uploads.
///
/// Expected: Ok with two records, two blobs and distinct fingerprints
#[tokio::test]
async fn distinct_uploads_create_distinct_records() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_blob_dir()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let blobs = BlobStore::new(test.blob_dir.as_ref().unwrap().path());
    let service = ImageService::new(db, &blobs);

    let a = service.ingest(png("a.png", b"first")).await?;
    let b = service.ingest(png("b.png", b"second")).await?;

    assert!(a.is_new && b.is_new);
    assert_ne!(a.image.id, b.image.id);
    assert_ne!(a.image.fingerprint, b.image.fingerprint);
    assert_eq!(blob_count(&blobs).await, 2);

    let found = service
        .get_by_fingerprint(Fingerprint::of(b"second"))
        .await?;
    assert_eq!(found.id, b.image.id);

    Ok(())
}

/// Tests that a batch skips uploads with a non-image media type.
///
/// Expected: Ok with outcomes only for the image uploads
#[tokio::test]
async fn batch_skips_non_image_uploads() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_blob_dir()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let blobs = BlobStore::new(test.blob_dir.as_ref().unwrap().path());
    let service = ImageService::new(db, &blobs);

    let notes = Upload {
        file_name: "notes.txt".to_string(),
        content_type: "text/plain".to_string(),
        bytes: b"not an image".to_vec(),
    };

    let outcomes = service
        .ingest_batch(vec![png("one.png", b"one"), notes, png("two.png", b"two")])
        .await?;

    let titles: Vec<&str> = outcomes.iter().map(|o| o.image.title.as_str()).collect();
    assert_eq!(titles, vec!["one.png", "two.png"]);
    assert_eq!(blob_count(&blobs).await, 2);

    Ok(())
}

/// Tests ingesting after the previous record with the same bytes was deleted.
///
/// Expected: Ok with a fresh record and the blob written again
#[tokio::test]
async fn reingests_after_delete() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_blob_dir()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let blobs = BlobStore::new(test.blob_dir.as_ref().unwrap().path());
    let service = ImageService::new(db, &blobs);

    let first = service.ingest(png("logo.png", b"logo")).await?;
    service.delete(first.image.id).await?;

    let again = service.ingest(png("logo.png", b"logo")).await?;

    assert!(again.is_new);
    assert_ne!(again.image.id, first.image.id);
    assert!(blobs.exists(again.image.fingerprint).await?);

    Ok(())
}

/// Tests ingesting bytes whose record exists but whose blob has gone missing.
///
/// Expected: Ok with the existing record and the blob written back
#[tokio::test]
async fn restores_missing_blob_of_existing_image() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_blob_dir()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let blobs = BlobStore::new(test.blob_dir.as_ref().unwrap().path());
    let service = ImageService::new(db, &blobs);

    let first = service.ingest(png("map.png", b"map tiles")).await?;
    tokio::fs::remove_file(service.blob_path(&first.image))
        .await
        .unwrap();

    let again = service.ingest(png("map.png", b"map tiles")).await?;

    assert!(!again.is_new);
    assert_eq!(again.image.id, first.image.id);
    let stored = tokio::fs::read(service.blob_path(&again.image)).await.unwrap();
    assert_eq!(stored, b"map tiles");

    Ok(())
}
