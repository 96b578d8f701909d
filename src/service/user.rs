//! User management, authentication and the bootstrap super user.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        association::{AssociationGraph, UserImage},
        user::{UserChanges, UserRepository},
    },
    error::AppError,
    model::user::{CreateUserParams, NewUser, UpdateUserParams, User},
    util::{
        password::{hash_password, verify_password},
        validate::require_non_blank,
    },
};

/// Nickname given to the bootstrap super user.
const BOOTSTRAP_NICKNAME: &str = "admin";
/// Placeholder phone number for the bootstrap super user.
const BOOTSTRAP_PHONE: &str = "12345678901";

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Creates a user with a hashed password and an optional avatar.
    ///
    /// # Returns
    /// - `Ok(User)` - Created user
    /// - `Err(AppError::Validation)` - A required field is blank
    /// - `Err(AppError::Conflict)` - Username or phone already used by a live user
    /// - `Err(AppError::NotFound)` - Given avatar image does not exist
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        require_non_blank("nickname", &params.nickname)?;
        require_non_blank("phone", &params.phone)?;
        require_non_blank("username", &params.username)?;
        require_non_blank("password", &params.password)?;

        let password_hash = hash_password(&params.password)?;

        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        if repo.username_taken(&params.username, None).await? {
            return Err(AppError::Conflict(format!(
                "Username '{}' is already in use",
                params.username
            )));
        }
        if repo.phone_taken(&params.phone, None).await? {
            return Err(AppError::Conflict(format!(
                "Phone '{}' is already in use",
                params.phone
            )));
        }

        let user = repo
            .create(NewUser {
                nickname: params.nickname,
                phone: params.phone,
                username: params.username,
                password_hash,
                is_super: params.is_super,
            })
            .await?;

        if let Some(image_id) = params.image_id {
            if !AssociationGraph::new(&txn)
                .set_reference::<UserImage>(user.id, Some(image_id))
                .await?
            {
                return Err(AppError::NotFound(format!("Image {} not found", image_id)));
            }
        }

        let user = repo.get_by_id(user.id).await?.ok_or_else(|| {
            AppError::InternalError(format!("User {} vanished during create", user.id))
        })?;
        txn.commit().await?;

        tracing::info!(id = user.id, username = %user.username, "Created user");

        Ok(user)
    }

    /// Updates the fields present in `params`.
    ///
    /// Username and phone uniqueness is only re-checked when the value actually changes.
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<User, AppError> {
        for (field, value) in [
            ("nickname", &params.nickname),
            ("phone", &params.phone),
            ("username", &params.username),
            ("password", &params.password),
        ] {
            if let Some(value) = value {
                require_non_blank(field, value)?;
            }
        }

        let password_hash = params
            .password
            .as_deref()
            .map(hash_password)
            .transpose()?;

        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        let current = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

        if let Some(username) = &params.username {
            if *username != current.username && repo.username_taken(username, Some(id)).await? {
                return Err(AppError::Conflict(format!(
                    "Username '{}' is already in use",
                    username
                )));
            }
        }
        if let Some(phone) = &params.phone {
            if *phone != current.phone && repo.phone_taken(phone, Some(id)).await? {
                return Err(AppError::Conflict(format!(
                    "Phone '{}' is already in use",
                    phone
                )));
            }
        }

        let mut user = repo
            .update(
                id,
                UserChanges {
                    nickname: params.nickname,
                    phone: params.phone,
                    username: params.username,
                    password_hash,
                    is_super: params.is_super,
                },
            )
            .await?;

        if let Some(image_id) = params.image_id {
            if !AssociationGraph::new(&txn)
                .set_reference::<UserImage>(id, image_id)
                .await?
            {
                return Err(AppError::NotFound(format!(
                    "Image {} not found",
                    image_id.unwrap_or_default()
                )));
            }
            user.image_id = image_id;
        }

        txn.commit().await?;

        Ok(user)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !UserRepository::new(&txn).soft_delete(id).await? {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }
        txn.commit().await?;

        tracing::info!(id, "Deleted user");

        Ok(())
    }

    /// Verifies a username and password pair.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match
    /// - `Err(AppError::NotFound)` - No live user with that username
    /// - `Err(AppError::Validation)` - Password does not match
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        let credentials = UserRepository::new(self.db)
            .get_credentials(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", username)))?;

        if !verify_password(password, &credentials.password_hash)? {
            return Err(AppError::Validation("Incorrect password".to_string()));
        }

        Ok(credentials.user)
    }

    /// Creates the initial super user if no live user exists.
    ///
    /// Idempotent; intended to run once during startup.
    ///
    /// # Arguments
    /// - `username` - Username for the bootstrap account
    /// - `password` - Plaintext password for the bootstrap account
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Super user created
    /// - `Ok(None)` - Users already exist, nothing created
    /// - `Err(AppError)` - Database or hashing error
    pub async fn ensure_super_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, AppError> {
        require_non_blank("username", username)?;
        require_non_blank("password", password)?;

        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        if repo.count().await? > 0 {
            tracing::debug!("Users already exist, skipping super user bootstrap");
            return Ok(None);
        }

        let user = repo
            .create(NewUser {
                nickname: BOOTSTRAP_NICKNAME.to_string(),
                phone: BOOTSTRAP_PHONE.to_string(),
                username: username.to_string(),
                password_hash: hash_password(password)?,
                is_super: true,
            })
            .await?;
        txn.commit().await?;

        tracing::info!(id = user.id, username = %user.username, "Created initial super user");

        Ok(Some(user))
    }
}
