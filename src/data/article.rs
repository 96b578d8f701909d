use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    data::live::{self, Live},
    model::article::{Article, ArticleFilter, ArticleStatus, UpdateArticleParams},
};

/// Escape character for LIKE patterns built from user input.
const LIKE_ESCAPE: char = '!';

/// Attribute fields written when inserting an article.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: String,
    pub description: String,
    pub content: String,
    pub status: ArticleStatus,
    pub category_id: i32,
    pub user_id: i32,
}

pub struct ArticleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ArticleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the article row. Edges are written separately through `AssociationGraph`.
    pub async fn create(&self, article: NewArticle) -> Result<Article, DbErr> {
        let now = Utc::now();
        let article = entity::article::ActiveModel {
            title: ActiveValue::Set(article.title),
            description: ActiveValue::Set(article.description),
            content: ActiveValue::Set(article.content),
            status: ActiveValue::Set(article.status.into()),
            category_id: ActiveValue::Set(article.category_id),
            user_id: ActiveValue::Set(article.user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Article::from_entity(article))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Article>, DbErr> {
        let article = entity::prelude::Article::find_live_by_id(id)
            .one(self.db)
            .await?;

        Ok(article.map(Article::from_entity))
    }

    pub async fn title_taken(&self, title: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        live::value_taken::<entity::article::Entity, C, _>(
            self.db,
            entity::article::Column::Title,
            title,
            exclude_id,
        )
        .await
    }

    /// Applies the attribute fields present in `params` to a live article.
    ///
    /// Category and edge lists in `params` are ignored here; they are edges and are
    /// written through `AssociationGraph`.
    ///
    /// # Returns
    /// - `Ok(Article)` - Updated article
    /// - `Err(DbErr::RecordNotFound)` - No live article with that ID
    pub async fn update(&self, id: i32, params: &UpdateArticleParams) -> Result<Article, DbErr> {
        let article = entity::prelude::Article::find_live_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Article with id {} not found", id)))?;

        let mut active_model = article.into_active_model();
        if let Some(title) = &params.title {
            active_model.title = ActiveValue::Set(title.clone());
        }
        if let Some(description) = &params.description {
            active_model.description = ActiveValue::Set(description.clone());
        }
        if let Some(content) = &params.content {
            active_model.content = ActiveValue::Set(content.clone());
        }
        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status.into());
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let article = active_model.update(self.db).await?;

        Ok(Article::from_entity(article))
    }

    /// Gets one page of live articles matching `filter`, plus the total match count.
    ///
    /// Rows are ordered newest first with the ID as tie-break, so consecutive pages never
    /// repeat or skip a row. The total is counted over the same filters without the page
    /// window.
    ///
    /// # Arguments
    /// - `filter` - Optional title substring (ASCII case-insensitive), category and status
    ///   constraints
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of rows per page
    ///
    /// # Returns
    /// - `Ok((articles, total))` - Rows on the requested page and the total match count
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        filter: &ArticleFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Article>, u64), DbErr> {
        let mut query = entity::prelude::Article::find_live();

        if let Some(title) = &filter.title {
            query = query.filter(Expr::cust_with_values(
                r#"LOWER("title") LIKE ? ESCAPE '!'"#,
                [title_pattern(title)],
            ));
        }
        if let Some(category_id) = filter.category_id {
            query = query.filter(entity::article::Column::CategoryId.eq(category_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(
                entity::article::Column::Status
                    .eq(entity::sea_orm_active_enums::ArticleStatus::from(status)),
            );
        }

        let paginator = query
            .order_by_desc(entity::article::Column::CreatedAt)
            .order_by_desc(entity::article::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let articles = paginator.fetch_page(page).await?;

        Ok((articles.into_iter().map(Article::from_entity).collect(), total))
    }

    /// Tombstones an article. Its join rows stay in place.
    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        live::tombstone::<entity::article::Entity, C>(self.db, id).await
    }
}

/// Builds a lowercase `%term%` pattern with LIKE wildcards in `term` escaped.
///
/// Only ASCII letters are folded, matching SQLite's `LOWER()` on the column side, so
/// case-insensitivity is ASCII-only and non-ASCII letters must match exactly.
fn title_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_ascii_lowercase().chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
