use crate::{
    error::{AppError, ErrorKind},
    model::{
        article::{ArticleFilter, ArticleStatus, CreateArticleParams, UpdateArticleParams},
        pagination::PageRequest,
    },
    service::{article::ArticleService, tag::TagService},
};
use test_utils::{builder::TestBuilder, factory};

mod list;
mod update;

fn params(title: &str, category_id: i32) -> CreateArticleParams {
    CreateArticleParams {
        title: title.to_string(),
        description: "Summary".to_string(),
        content: "Body".to_string(),
        category_id,
        status: ArticleStatus::Draft,
        image_ids: Vec::new(),
        tag_ids: Vec::new(),
    }
}
