use sea_orm::DatabaseConnection;

use crate::{data::user::UserRepository, error::AppError};

/// Resolves whether a principal holds super privileges.
///
/// Used by the routing layer as a precondition for privileged operations.
pub struct RoleGate<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleGate<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks the super-privilege flag of a user.
    ///
    /// # Arguments
    /// - `user_id` - ID of the authenticated user
    ///
    /// # Returns
    /// - `Ok(true)` - User exists and is privileged
    /// - `Ok(false)` - User exists and is not privileged
    /// - `Err(AppError::NotFound)` - No live user with that ID
    pub async fn is_privileged(&self, user_id: i32) -> Result<bool, AppError> {
        let user = UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        Ok(user.is_super)
    }
}
