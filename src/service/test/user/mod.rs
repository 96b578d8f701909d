use crate::{
    error::{AppError, ErrorKind},
    model::user::{CreateUserParams, UpdateUserParams},
    service::user::UserService,
};
use test_utils::{builder::TestBuilder, factory};

mod authenticate;
mod create;

fn params(username: &str, phone: &str) -> CreateUserParams {
    CreateUserParams {
        nickname: username.to_string(),
        phone: phone.to_string(),
        username: username.to_string(),
        password: "correct horse".to_string(),
        ..Default::default()
    }
}
