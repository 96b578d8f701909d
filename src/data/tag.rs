use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, IntoActiveModel, QueryOrder,
};

use crate::{
    data::live::{self, Live},
    model::tag::{CreateTagParams, Tag, UpdateTagParams},
};

pub struct TagRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TagRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateTagParams) -> Result<Tag, DbErr> {
        let now = Utc::now();
        let tag = entity::tag::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Tag::from_entity(tag))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Tag>, DbErr> {
        let tag = entity::prelude::Tag::find_live_by_id(id).one(self.db).await?;

        Ok(tag.map(Tag::from_entity))
    }

    /// Gets all live tags ordered by name
    pub async fn get_all(&self) -> Result<Vec<Tag>, DbErr> {
        let tags = entity::prelude::Tag::find_live()
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await?;

        Ok(tags.into_iter().map(Tag::from_entity).collect())
    }

    pub async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        live::value_taken::<entity::tag::Entity, C, _>(
            self.db,
            entity::tag::Column::Name,
            name,
            exclude_id,
        )
        .await
    }

    /// Applies the fields present in `params`; `DbErr::RecordNotFound` if not live
    pub async fn update(&self, id: i32, params: UpdateTagParams) -> Result<Tag, DbErr> {
        let tag = entity::prelude::Tag::find_live_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Tag with id {} not found", id)))?;

        let mut active_model = tag.into_active_model();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let tag = active_model.update(self.db).await?;

        Ok(Tag::from_entity(tag))
    }

    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        live::tombstone::<entity::tag::Entity, C>(self.db, id).await
    }
}
