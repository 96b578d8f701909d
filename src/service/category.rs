use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        category::CategoryRepository,
        integrity::{DeleteVerdict, EntityKind, IntegrityGuard},
    },
    error::AppError,
    model::category::{Category, CreateCategoryParams, UpdateCategoryParams},
    service::integrity_violation,
    util::validate::{require_non_blank, require_url_safe},
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all live categories in display order
    pub async fn list(&self) -> Result<Vec<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Category, AppError> {
        CategoryRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    pub async fn get_by_alias(&self, alias: &str) -> Result<Category, AppError> {
        CategoryRepository::new(self.db)
            .get_by_alias(alias)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category with alias '{}' not found", alias)))
    }

    /// Creates a category with a unique name and alias.
    ///
    /// # Returns
    /// - `Ok(Category)` - Created category
    /// - `Err(AppError::Validation)` - Blank name or alias, or alias not URL-safe
    /// - `Err(AppError::Conflict)` - Name or alias already used by a live category
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, AppError> {
        require_non_blank("name", &params.name)?;
        require_url_safe("alias", &params.alias)?;

        let txn = self.db.begin().await?;
        let repo = CategoryRepository::new(&txn);

        if repo.name_taken(&params.name, None).await? {
            return Err(AppError::Conflict(format!(
                "Category name '{}' is already in use",
                params.name
            )));
        }
        if repo.alias_taken(&params.alias, None).await? {
            return Err(AppError::Conflict(format!(
                "Category alias '{}' is already in use",
                params.alias
            )));
        }

        let category = repo.create(params).await?;
        txn.commit().await?;

        tracing::info!(id = category.id, name = %category.name, "Created category");

        Ok(category)
    }

    /// Updates the fields present in `params`.
    ///
    /// Name and alias must stay unique among live categories other than this one.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateCategoryParams,
    ) -> Result<Category, AppError> {
        if let Some(name) = &params.name {
            require_non_blank("name", name)?;
        }
        if let Some(alias) = &params.alias {
            require_url_safe("alias", alias)?;
        }

        let txn = self.db.begin().await?;
        let repo = CategoryRepository::new(&txn);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }
        if let Some(name) = &params.name {
            if repo.name_taken(name, Some(id)).await? {
                return Err(AppError::Conflict(format!(
                    "Category name '{}' is already in use",
                    name
                )));
            }
        }
        if let Some(alias) = &params.alias {
            if repo.alias_taken(alias, Some(id)).await? {
                return Err(AppError::Conflict(format!(
                    "Category alias '{}' is already in use",
                    alias
                )));
            }
        }

        let category = repo.update(id, params).await?;
        txn.commit().await?;

        Ok(category)
    }

    /// Tombstones a category unless a live article is filed under it.
    ///
    /// # Returns
    /// - `Ok(())` - Category deleted
    /// - `Err(AppError::NotFound)` - No live category with that ID
    /// - `Err(AppError::ReferentialIntegrity)` - A live article still references it
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = CategoryRepository::new(&txn);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }
        if let DeleteVerdict::Blocked(relation) = IntegrityGuard::new(&txn)
            .can_delete(EntityKind::Category, id)
            .await?
        {
            return Err(integrity_violation(EntityKind::Category, id, relation));
        }

        repo.soft_delete(id).await?;
        txn.commit().await?;

        tracing::info!(id, "Deleted category");

        Ok(())
    }
}
