use crate::{data::image::ImageRepository, model::image::Fingerprint};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
