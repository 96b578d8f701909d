pub use super::article::Entity as Article;
pub use super::article_image::Entity as ArticleImage;
pub use super::article_tag::Entity as ArticleTag;
pub use super::category::Entity as Category;
pub use super::dict::Entity as Dict;
pub use super::image::Entity as Image;
pub use super::tag::Entity as Tag;
pub use super::user::Entity as User;
