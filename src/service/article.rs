//! Article writes with their edges, and the filtered article listing.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        article::{ArticleRepository, NewArticle},
        association::{ArticleCategory, ArticleImages, ArticleTags, AssociationGraph},
        live,
    },
    error::AppError,
    model::{
        article::{
            Article, ArticleFilter, ArticleWithRelations, CreateArticleParams,
            UpdateArticleParams,
        },
        pagination::{Page, PageRequest},
    },
    util::validate::require_non_blank,
};

pub struct ArticleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a live article with its image and tag IDs
    pub async fn get_by_id(&self, id: i32) -> Result<ArticleWithRelations, AppError> {
        let article = ArticleRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Article {} not found", id)))?;

        Ok(with_relations(self.db, article).await?)
    }

    /// Creates an article owned by `user_id`, then appends its image and tag edges.
    ///
    /// The article row and its edges are written in one transaction. Image and tag IDs
    /// that do not resolve to a live row are skipped.
    ///
    /// # Arguments
    /// - `user_id` - ID of the authoring user
    /// - `params` - Article fields and optional image/tag IDs
    ///
    /// # Returns
    /// - `Ok(ArticleWithRelations)` - Created article with the edges actually written
    /// - `Err(AppError::Validation)` - Blank title, description or content
    /// - `Err(AppError::NotFound)` - User or category does not exist
    /// - `Err(AppError::Conflict)` - Title already used by a live article
    pub async fn create(
        &self,
        user_id: i32,
        params: CreateArticleParams,
    ) -> Result<ArticleWithRelations, AppError> {
        require_non_blank("title", &params.title)?;
        require_non_blank("description", &params.description)?;
        require_non_blank("content", &params.content)?;

        let txn = self.db.begin().await?;
        let repo = ArticleRepository::new(&txn);
        let graph = AssociationGraph::new(&txn);

        if !live::exists::<entity::user::Entity, _>(&txn, user_id).await? {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }
        if !live::exists::<entity::category::Entity, _>(&txn, params.category_id).await? {
            return Err(AppError::NotFound(format!(
                "Category {} not found",
                params.category_id
            )));
        }
        if repo.title_taken(&params.title, None).await? {
            return Err(AppError::Conflict(format!(
                "Article title '{}' is already in use",
                params.title
            )));
        }

        let article = repo
            .create(NewArticle {
                title: params.title,
                description: params.description,
                content: params.content,
                status: params.status,
                category_id: params.category_id,
                user_id,
            })
            .await?;

        graph
            .append::<ArticleImages>(article.id, &params.image_ids)
            .await?;
        graph.append::<ArticleTags>(article.id, &params.tag_ids).await?;

        let result = with_relations(&txn, article).await?;
        txn.commit().await?;

        tracing::info!(id = result.article.id, user_id, "Created article");

        Ok(result)
    }

    /// Updates the fields present in `params`.
    ///
    /// A present `image_ids` or `tag_ids` list replaces the article's edge set (an empty
    /// list clears it); an absent list leaves the edges untouched.
    ///
    /// # Returns
    /// - `Ok(ArticleWithRelations)` - Updated article with its current edges
    /// - `Err(AppError::Validation)` - A present text field is blank
    /// - `Err(AppError::NotFound)` - Article, or a newly given category, does not exist
    /// - `Err(AppError::Conflict)` - New title already used by another live article
    pub async fn update(
        &self,
        id: i32,
        params: UpdateArticleParams,
    ) -> Result<ArticleWithRelations, AppError> {
        if let Some(title) = &params.title {
            require_non_blank("title", title)?;
        }
        if let Some(description) = &params.description {
            require_non_blank("description", description)?;
        }
        if let Some(content) = &params.content {
            require_non_blank("content", content)?;
        }

        let txn = self.db.begin().await?;
        let repo = ArticleRepository::new(&txn);
        let graph = AssociationGraph::new(&txn);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Article {} not found", id)));
        }
        if let Some(title) = &params.title {
            if repo.title_taken(title, Some(id)).await? {
                return Err(AppError::Conflict(format!(
                    "Article title '{}' is already in use",
                    title
                )));
            }
        }

        repo.update(id, &params).await?;

        if let Some(category_id) = params.category_id {
            if !graph
                .set_reference::<ArticleCategory>(id, Some(category_id))
                .await?
            {
                return Err(AppError::NotFound(format!(
                    "Category {} not found",
                    category_id
                )));
            }
        }
        if let Some(image_ids) = &params.image_ids {
            graph.replace::<ArticleImages>(id, image_ids).await?;
        }
        if let Some(tag_ids) = &params.tag_ids {
            graph.replace::<ArticleTags>(id, tag_ids).await?;
        }

        let article = repo.get_by_id(id).await?.ok_or_else(|| {
            AppError::InternalError(format!("Article {} vanished during update", id))
        })?;
        let result = with_relations(&txn, article).await?;
        txn.commit().await?;

        Ok(result)
    }

    /// Tombstones an article. Its edges are kept on the tombstoned row.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !ArticleRepository::new(&txn).soft_delete(id).await? {
            return Err(AppError::NotFound(format!("Article {} not found", id)));
        }
        txn.commit().await?;

        tracing::info!(id, "Deleted article");

        Ok(())
    }

    /// Lists live articles matching `filter`, one page at a time.
    ///
    /// Articles are ordered newest first with ID as tie-break. `total` and `total_pages`
    /// describe the whole filtered set, not just the returned page.
    ///
    /// # Returns
    /// - `Ok(Page<ArticleWithRelations>)` - Requested page, possibly empty past the end
    /// - `Err(AppError::Validation)` - Page or page size out of range
    pub async fn list(
        &self,
        filter: ArticleFilter,
        request: PageRequest,
    ) -> Result<Page<ArticleWithRelations>, AppError> {
        request.validate()?;

        let (articles, total) = ArticleRepository::new(self.db)
            .get_paginated(&filter, request.page_index(), request.page_size)
            .await?;

        let graph = AssociationGraph::new(self.db);
        let ids: Vec<i32> = articles.iter().map(|a| a.id).collect();
        let mut images = graph.targets_for_owners::<ArticleImages>(&ids).await?;
        let mut tags = graph.targets_for_owners::<ArticleTags>(&ids).await?;

        let items = articles
            .into_iter()
            .map(|article| ArticleWithRelations {
                image_ids: images.remove(&article.id).unwrap_or_default(),
                tag_ids: tags.remove(&article.id).unwrap_or_default(),
                article,
            })
            .collect();

        Ok(Page::new(items, total, request))
    }
}

async fn with_relations<C: ConnectionTrait>(
    db: &C,
    article: Article,
) -> Result<ArticleWithRelations, sea_orm::DbErr> {
    let graph = AssociationGraph::new(db);
    let image_ids = graph.targets::<ArticleImages>(article.id).await?;
    let tag_ids = graph.targets::<ArticleTags>(article.id).await?;

    Ok(ArticleWithRelations {
        article,
        image_ids,
        tag_ids,
    })
}
