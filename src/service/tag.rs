use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        integrity::{DeleteVerdict, EntityKind, IntegrityGuard},
        tag::TagRepository,
    },
    error::AppError,
    model::tag::{CreateTagParams, Tag, UpdateTagParams},
    service::integrity_violation,
    util::validate::require_non_blank,
};

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Tag>, AppError> {
        Ok(TagRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Tag, AppError> {
        TagRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Tag {} not found", id)))
    }

    /// Creates a tag with a unique name
    pub async fn create(&self, params: CreateTagParams) -> Result<Tag, AppError> {
        require_non_blank("name", &params.name)?;

        let txn = self.db.begin().await?;
        let repo = TagRepository::new(&txn);

        if repo.name_taken(&params.name, None).await? {
            return Err(AppError::Conflict(format!(
                "Tag name '{}' is already in use",
                params.name
            )));
        }

        let tag = repo.create(params).await?;
        txn.commit().await?;

        Ok(tag)
    }

    pub async fn update(&self, id: i32, params: UpdateTagParams) -> Result<Tag, AppError> {
        if let Some(name) = &params.name {
            require_non_blank("name", name)?;
        }

        let txn = self.db.begin().await?;
        let repo = TagRepository::new(&txn);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Tag {} not found", id)));
        }
        if let Some(name) = &params.name {
            if repo.name_taken(name, Some(id)).await? {
                return Err(AppError::Conflict(format!(
                    "Tag name '{}' is already in use",
                    name
                )));
            }
        }

        let tag = repo.update(id, params).await?;
        txn.commit().await?;

        Ok(tag)
    }

    /// Tombstones a tag unless a live article carries it
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = TagRepository::new(&txn);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Tag {} not found", id)));
        }
        if let DeleteVerdict::Blocked(relation) = IntegrityGuard::new(&txn)
            .can_delete(EntityKind::Tag, id)
            .await?
        {
            return Err(integrity_violation(EntityKind::Tag, id, relation));
        }

        repo.soft_delete(id).await?;
        txn.commit().await?;

        Ok(())
    }
}
