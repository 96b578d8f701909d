use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, IntoActiveModel,
    QueryFilter, QueryOrder,
};

use crate::{
    data::live::{self, Live},
    model::category::{Category, CreateCategoryParams, UpdateCategoryParams},
};

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new category
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, DbErr> {
        let now = Utc::now();
        let category = entity::category::ActiveModel {
            name: ActiveValue::Set(params.name),
            alias: ActiveValue::Set(params.alias),
            description: ActiveValue::Set(params.description),
            sort: ActiveValue::Set(params.sort),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Category::from_entity(category))
    }

    /// Gets a live category by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Category>, DbErr> {
        let category = entity::prelude::Category::find_live_by_id(id)
            .one(self.db)
            .await?;

        Ok(category.map(Category::from_entity))
    }

    /// Gets a live category by its alias
    pub async fn get_by_alias(&self, alias: &str) -> Result<Option<Category>, DbErr> {
        let category = entity::prelude::Category::find_live()
            .filter(entity::category::Column::Alias.eq(alias))
            .one(self.db)
            .await?;

        Ok(category.map(Category::from_entity))
    }

    /// Gets all live categories, highest sort first, then in creation order
    pub async fn get_all(&self) -> Result<Vec<Category>, DbErr> {
        let categories = entity::prelude::Category::find_live()
            .order_by_desc(entity::category::Column::Sort)
            .order_by_asc(entity::category::Column::CreatedAt)
            .order_by_asc(entity::category::Column::Id)
            .all(self.db)
            .await?;

        Ok(categories.into_iter().map(Category::from_entity).collect())
    }

    /// Checks whether another live category already uses `name`
    pub async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        live::value_taken::<entity::category::Entity, C, _>(
            self.db,
            entity::category::Column::Name,
            name,
            exclude_id,
        )
        .await
    }

    /// Checks whether another live category already uses `alias`
    pub async fn alias_taken(&self, alias: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        live::value_taken::<entity::category::Entity, C, _>(
            self.db,
            entity::category::Column::Alias,
            alias,
            exclude_id,
        )
        .await
    }

    /// Applies the fields present in `params` to a live category.
    ///
    /// # Returns
    /// - `Ok(Category)` - Updated category
    /// - `Err(DbErr::RecordNotFound)` - No live category with that ID
    pub async fn update(&self, id: i32, params: UpdateCategoryParams) -> Result<Category, DbErr> {
        let category = entity::prelude::Category::find_live_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Category with id {} not found", id)))?;

        let mut active_model = category.into_active_model();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(alias) = params.alias {
            active_model.alias = ActiveValue::Set(alias);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(sort) = params.sort {
            active_model.sort = ActiveValue::Set(sort);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let category = active_model.update(self.db).await?;

        Ok(Category::from_entity(category))
    }

    /// Tombstones a category; returns false if it was not live
    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        live::tombstone::<entity::category::Entity, C>(self.db, id).await
    }
}
