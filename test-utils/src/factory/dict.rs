//! Dictionary factory for creating test dict entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test dictionary entries with customizable fields.
pub struct DictFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    code: String,
    extra: String,
    parent_id: Option<i32>,
    image_id: Option<i32>,
}

impl<'a> DictFactory<'a> {
    /// Creates a new DictFactory with name `"Dict {id}"`, code `"dict_{id}"`, no parent
    /// and no image.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Dict {}", id),
            code: format!("dict_{}", id),
            extra: String::new(),
            parent_id: None,
            image_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = extra.into();
        self
    }

    pub fn parent_id(mut self, parent_id: i32) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn image_id(mut self, image_id: i32) -> Self {
        self.image_id = Some(image_id);
        self
    }

    /// Builds and inserts the dict entity into the database.
    pub async fn build(self) -> Result<entity::dict::Model, DbErr> {
        let now = Utc::now();
        entity::dict::ActiveModel {
            name: ActiveValue::Set(self.name),
            code: ActiveValue::Set(self.code),
            extra: ActiveValue::Set(self.extra),
            description: ActiveValue::Set(String::new()),
            parent_id: ActiveValue::Set(self.parent_id),
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

/// Creates a root dict with default values.
pub async fn create_dict(db: &DatabaseConnection) -> Result<entity::dict::Model, DbErr> {
    DictFactory::new(db).build().await
}

/// Creates a dict whose parent is `parent_id`.
pub async fn create_child_dict(
    db: &DatabaseConnection,
    parent_id: i32,
) -> Result<entity::dict::Model, DbErr> {
    DictFactory::new(db).parent_id(parent_id).build().await
}
