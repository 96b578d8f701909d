use crate::{
    data::article::ArticleRepository,
    error::{AppError, ErrorKind},
    model::category::{CreateCategoryParams, UpdateCategoryParams},
    service::category::CategoryService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;

fn params(name: &str, alias: &str) -> CreateCategoryParams {
    CreateCategoryParams {
        name: name.to_string(),
        alias: alias.to_string(),
        ..Default::default()
    }
}
