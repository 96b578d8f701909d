use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, IntoActiveModel,
    QueryFilter, QueryOrder,
};

use crate::{
    data::live::{self, Live},
    model::dict::{Dict, UpdateDictParams},
};

/// Attribute fields written when inserting a dict.
///
/// Parent and image references are set afterwards through `AssociationGraph`.
#[derive(Debug, Clone)]
pub struct NewDict {
    pub name: String,
    pub code: String,
    pub extra: String,
    pub description: String,
}

pub struct DictRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DictRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a dict with no parent and no image
    pub async fn create(&self, dict: NewDict) -> Result<Dict, DbErr> {
        let now = Utc::now();
        let dict = entity::dict::ActiveModel {
            name: ActiveValue::Set(dict.name),
            code: ActiveValue::Set(dict.code),
            extra: ActiveValue::Set(dict.extra),
            description: ActiveValue::Set(dict.description),
            parent_id: ActiveValue::Set(None),
            image_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Dict::from_entity(dict))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Dict>, DbErr> {
        let dict = entity::prelude::Dict::find_live_by_id(id).one(self.db).await?;

        Ok(dict.map(Dict::from_entity))
    }

    /// Gets a live dict by its unique code
    pub async fn get_by_code(&self, code: &str) -> Result<Option<Dict>, DbErr> {
        let dict = entity::prelude::Dict::find_live()
            .filter(entity::dict::Column::Code.eq(code))
            .one(self.db)
            .await?;

        Ok(dict.map(Dict::from_entity))
    }

    /// Gets live dicts by ID, in ascending ID order
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Dict>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let dicts = entity::prelude::Dict::find_live()
            .filter(entity::dict::Column::Id.is_in(ids))
            .order_by_asc(entity::dict::Column::Id)
            .all(self.db)
            .await?;

        Ok(dicts.into_iter().map(Dict::from_entity).collect())
    }

    pub async fn get_all(&self) -> Result<Vec<Dict>, DbErr> {
        let dicts = entity::prelude::Dict::find_live()
            .order_by_asc(entity::dict::Column::Id)
            .all(self.db)
            .await?;

        Ok(dicts.into_iter().map(Dict::from_entity).collect())
    }

    pub async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        live::value_taken::<entity::dict::Entity, C, _>(
            self.db,
            entity::dict::Column::Name,
            name,
            exclude_id,
        )
        .await
    }

    pub async fn code_taken(&self, code: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        live::value_taken::<entity::dict::Entity, C, _>(
            self.db,
            entity::dict::Column::Code,
            code,
            exclude_id,
        )
        .await
    }

    /// Applies the attribute fields present in `params`.
    ///
    /// Parent and image references are left to `AssociationGraph`.
    pub async fn update(&self, id: i32, params: &UpdateDictParams) -> Result<Dict, DbErr> {
        let dict = entity::prelude::Dict::find_live_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Dict with id {} not found", id)))?;

        let mut active_model = dict.into_active_model();
        if let Some(name) = &params.name {
            active_model.name = ActiveValue::Set(name.clone());
        }
        if let Some(code) = &params.code {
            active_model.code = ActiveValue::Set(code.clone());
        }
        if let Some(extra) = &params.extra {
            active_model.extra = ActiveValue::Set(extra.clone());
        }
        if let Some(description) = &params.description {
            active_model.description = ActiveValue::Set(description.clone());
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let dict = active_model.update(self.db).await?;

        Ok(Dict::from_entity(dict))
    }

    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        live::tombstone::<entity::dict::Entity, C>(self.db, id).await
    }
}
