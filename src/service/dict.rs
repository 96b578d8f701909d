//! Hierarchical dictionary operations.
//!
//! Parent links are not checked for cycles: a dict can be moved under one of its own
//! descendants. Such a cycle is unreachable from the roots and can never be deleted,
//! because every member has a live child.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        association::{AssociationGraph, DictImage, DictParent},
        dict::{DictRepository, NewDict},
        integrity::{DeleteVerdict, EntityKind, IntegrityGuard},
    },
    error::AppError,
    model::dict::{CreateDictParams, Dict, SubDicts, UpdateDictParams},
    service::integrity_violation,
    util::validate::require_non_blank,
};

pub struct DictService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DictService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Dict>, AppError> {
        Ok(DictRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Dict, AppError> {
        DictRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Dict {} not found", id)))
    }

    /// Creates a dict, then links its optional parent and image.
    ///
    /// # Returns
    /// - `Ok(Dict)` - Created dict
    /// - `Err(AppError::Validation)` - Blank name or code
    /// - `Err(AppError::Conflict)` - Name or code already used by a live dict
    /// - `Err(AppError::NotFound)` - Given parent or image does not exist
    pub async fn create(&self, params: CreateDictParams) -> Result<Dict, AppError> {
        require_non_blank("name", &params.name)?;
        require_non_blank("code", &params.code)?;

        let txn = self.db.begin().await?;
        let repo = DictRepository::new(&txn);

        if repo.name_taken(&params.name, None).await? {
            return Err(AppError::Conflict(format!(
                "Dict name '{}' is already in use",
                params.name
            )));
        }
        if repo.code_taken(&params.code, None).await? {
            return Err(AppError::Conflict(format!(
                "Dict code '{}' is already in use",
                params.code
            )));
        }

        let dict = repo
            .create(NewDict {
                name: params.name,
                code: params.code,
                extra: params.extra,
                description: params.description,
            })
            .await?;

        if let Some(parent_id) = params.parent_id {
            link_parent(&txn, dict.id, Some(parent_id)).await?;
        }
        if let Some(image_id) = params.image_id {
            link_image(&txn, dict.id, Some(image_id)).await?;
        }

        let dict = reload(&repo, dict.id).await?;
        txn.commit().await?;

        Ok(dict)
    }

    /// Updates the fields present in `params`.
    ///
    /// `parent_id` and `image_id` are tri-state: absent leaves the link alone,
    /// `Some(None)` detaches it and `Some(Some(id))` moves it to a live target.
    pub async fn update(&self, id: i32, params: UpdateDictParams) -> Result<Dict, AppError> {
        if let Some(name) = &params.name {
            require_non_blank("name", name)?;
        }
        if let Some(code) = &params.code {
            require_non_blank("code", code)?;
        }

        let txn = self.db.begin().await?;
        let repo = DictRepository::new(&txn);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Dict {} not found", id)));
        }
        if let Some(name) = &params.name {
            if repo.name_taken(name, Some(id)).await? {
                return Err(AppError::Conflict(format!(
                    "Dict name '{}' is already in use",
                    name
                )));
            }
        }
        if let Some(code) = &params.code {
            if repo.code_taken(code, Some(id)).await? {
                return Err(AppError::Conflict(format!(
                    "Dict code '{}' is already in use",
                    code
                )));
            }
        }

        repo.update(id, &params).await?;

        if let Some(parent_id) = params.parent_id {
            link_parent(&txn, id, parent_id).await?;
        }
        if let Some(image_id) = params.image_id {
            link_image(&txn, id, image_id).await?;
        }

        let dict = reload(&repo, id).await?;
        txn.commit().await?;

        Ok(dict)
    }

    /// Tombstones a dict unless another live dict has it as parent
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = DictRepository::new(&txn);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Dict {} not found", id)));
        }
        if let DeleteVerdict::Blocked(relation) = IntegrityGuard::new(&txn)
            .can_delete(EntityKind::Dict, id)
            .await?
        {
            return Err(integrity_violation(EntityKind::Dict, id, relation));
        }

        repo.soft_delete(id).await?;
        txn.commit().await?;

        Ok(())
    }

    /// Gets the `extra` payload of the dict with the given code
    pub async fn extra_by_code(&self, code: &str) -> Result<String, AppError> {
        let dict = DictRepository::new(self.db)
            .get_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Dict with code '{}' not found", code)))?;

        Ok(dict.extra)
    }

    /// Gets the direct children of the dict with the given code.
    ///
    /// # Returns
    /// - `Ok(SubDicts::Found(children))` - Live children in ascending ID order
    /// - `Ok(SubDicts::NoChildren)` - Dict exists but has no live children
    /// - `Err(AppError::NotFound)` - No live dict with that code
    pub async fn sub_dicts_by_code(&self, code: &str) -> Result<SubDicts, AppError> {
        let repo = DictRepository::new(self.db);

        let dict = repo
            .get_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Dict with code '{}' not found", code)))?;

        let child_ids = AssociationGraph::new(self.db)
            .referrers::<DictParent>(dict.id)
            .await?;
        if child_ids.is_empty() {
            return Ok(SubDicts::NoChildren);
        }

        Ok(SubDicts::Found(repo.get_by_ids(child_ids).await?))
    }
}

async fn link_parent<C: ConnectionTrait>(
    db: &C,
    id: i32,
    parent_id: Option<i32>,
) -> Result<(), AppError> {
    if !AssociationGraph::new(db)
        .set_reference::<DictParent>(id, parent_id)
        .await?
    {
        return Err(AppError::NotFound(format!(
            "Parent dict {} not found",
            parent_id.unwrap_or_default()
        )));
    }

    Ok(())
}

async fn link_image<C: ConnectionTrait>(
    db: &C,
    id: i32,
    image_id: Option<i32>,
) -> Result<(), AppError> {
    if !AssociationGraph::new(db)
        .set_reference::<DictImage>(id, image_id)
        .await?
    {
        return Err(AppError::NotFound(format!(
            "Image {} not found",
            image_id.unwrap_or_default()
        )));
    }

    Ok(())
}

async fn reload<C: ConnectionTrait>(
    repo: &DictRepository<'_, C>,
    id: i32,
) -> Result<Dict, AppError> {
    repo.get_by_id(id)
        .await?
        .ok_or_else(|| AppError::InternalError(format!("Dict {} vanished during write", id)))
}
