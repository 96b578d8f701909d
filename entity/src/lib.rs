//! SeaORM entity definitions for the content-management schema.
//!
//! One module per table. Tables carrying a `deleted_at` tombstone are filtered through the
//! live read path in the `cms` data layer; nothing in this crate applies that filter itself.

pub mod prelude;

pub mod article;
pub mod article_image;
pub mod article_tag;
pub mod category;
pub mod dict;
pub mod image;
pub mod sea_orm_active_enums;
pub mod tag;
pub mod user;
