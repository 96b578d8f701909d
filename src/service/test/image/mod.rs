use crate::{
    data::{
        association::{ArticleImages, AssociationGraph},
        blob::BlobStore,
    },
    error::{AppError, ErrorKind},
    model::image::{Fingerprint, Upload},
    service::image::ImageService,
};
use test_utils::{builder::TestBuilder, factory};

mod ingest;

fn png(file_name: &str, bytes: &[u8]) -> Upload {
    Upload {
        file_name: file_name.to_string(),
        content_type: "image/png".to_string(),
        bytes: bytes.to_vec(),
    }
}

/// Counts the files in the blob directory.
async fn blob_count(blobs: &BlobStore) -> usize {
    let mut entries = tokio::fs::read_dir(blobs.dir()).await.unwrap();
    let mut count = 0;
    while entries.next_entry().await.unwrap().is_some() {
        count += 1;
    }
    count
}
