use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    data::live::{self, Live},
    model::user::{NewUser, User, UserCredentials},
};

/// Attribute changes for a user; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub nickname: Option<String>,
    pub phone: Option<String>,
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub is_super: Option<bool>,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a user without an avatar.
    ///
    /// # Arguments
    /// - `user` - User fields with the password already hashed
    ///
    /// # Returns
    /// - `Ok(User)` - Created user
    /// - `Err(DbErr)` - Database error, including unique violations on username or phone
    pub async fn create(&self, user: NewUser) -> Result<User, DbErr> {
        let now = Utc::now();
        let user = entity::user::ActiveModel {
            nickname: ActiveValue::Set(user.nickname),
            phone: ActiveValue::Set(user.phone),
            username: ActiveValue::Set(user.username),
            password_hash: ActiveValue::Set(user.password_hash),
            is_super: ActiveValue::Set(user.is_super),
            image_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(user))
    }

    /// Gets a live user by ID.
    ///
    /// # Arguments
    /// - `id` - ID of the user
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No live user with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find_live_by_id(id).one(self.db).await?;

        Ok(user.map(User::from_entity))
    }

    /// Gets a live user and stored password hash by username
    pub async fn get_credentials(&self, username: &str) -> Result<Option<UserCredentials>, DbErr> {
        let user = entity::prelude::User::find_live()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(user.map(UserCredentials::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let users = entity::prelude::User::find_live()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }

    /// Counts live users.
    ///
    /// Used by the bootstrap routine to decide whether a super user must be created.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find_live().count(self.db).await
    }

    pub async fn username_taken(
        &self,
        username: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        live::value_taken::<entity::user::Entity, C, _>(
            self.db,
            entity::user::Column::Username,
            username,
            exclude_id,
        )
        .await
    }

    pub async fn phone_taken(&self, phone: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        live::value_taken::<entity::user::Entity, C, _>(
            self.db,
            entity::user::Column::Phone,
            phone,
            exclude_id,
        )
        .await
    }

    /// Applies `changes` to a live user; `DbErr::RecordNotFound` if not live
    pub async fn update(&self, id: i32, changes: UserChanges) -> Result<User, DbErr> {
        let user = entity::prelude::User::find_live_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("User with id {} not found", id)))?;

        let mut active_model = user.into_active_model();
        if let Some(nickname) = changes.nickname {
            active_model.nickname = ActiveValue::Set(nickname);
        }
        if let Some(phone) = changes.phone {
            active_model.phone = ActiveValue::Set(phone);
        }
        if let Some(username) = changes.username {
            active_model.username = ActiveValue::Set(username);
        }
        if let Some(password_hash) = changes.password_hash {
            active_model.password_hash = ActiveValue::Set(password_hash);
        }
        if let Some(is_super) = changes.is_super {
            active_model.is_super = ActiveValue::Set(is_super);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let user = active_model.update(self.db).await?;

        Ok(User::from_entity(user))
    }

    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        live::tombstone::<entity::user::Entity, C>(self.db, id).await
    }
}
