//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// The stored password hash is a placeholder; tests that exercise authentication
/// should create users through the user service so the password is really hashed.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .username("editor")
///     .is_super(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    nickname: String,
    phone: String,
    username: String,
    is_super: bool,
    image_id: Option<i32>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - nickname: `"User {id}"`
    /// - phone: `"1{id:010}"`
    /// - username: `"user_{id}"`
    /// - is_super: `false`
    /// - image_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            nickname: format!("User {}", id),
            phone: format!("1{:010}", id),
            username: format!("user_{}", id),
            is_super: false,
            image_id: None,
        }
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn is_super(mut self, is_super: bool) -> Self {
        self.is_super = is_super;
        self
    }

    /// Sets the avatar image reference.
    pub fn image_id(mut self, image_id: i32) -> Self {
        self.image_id = Some(image_id);
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            nickname: ActiveValue::Set(self.nickname),
            phone: ActiveValue::Set(self.phone),
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set("unhashed-test-password".to_string()),
            is_super: ActiveValue::Set(self.is_super),
            image_id: ActiveValue::Set(self.image_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
