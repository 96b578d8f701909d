use crate::data::association::{
    ArticleImages, ArticleTags, AssociationGraph, DictImage, DictParent, UserImage,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod append;
mod count_live_owners;
mod replace;
