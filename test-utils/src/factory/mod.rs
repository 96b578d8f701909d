//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows directly through SeaORM active
//! models, bypassing the service layer, so they are suitable for arranging state before
//! exercising the code under test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let category = factory::category::create_category(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, category, article) =
//!         factory::helpers::create_article_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let category = factory::category::CategoryFactory::new(&db)
//!     .name("News")
//!     .alias("news")
//!     .sort(10)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `category` - Create category entities
//! - `tag` - Create tag entities
//! - `image` - Create image catalog entities (no blob is written)
//! - `article` - Create article entities
//! - `dict` - Create dictionary entities
//! - `helpers` - Unique ID counter and convenience methods for entities with dependencies

pub mod article;
pub mod category;
pub mod dict;
pub mod helpers;
pub mod image;
pub mod tag;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use article::create_article;
pub use category::create_category;
pub use dict::{create_child_dict, create_dict};
pub use image::create_image;
pub use tag::create_tag;
pub use user::create_user;
