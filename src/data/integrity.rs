//! Pre-delete reference checks.
//!
//! A row may only be tombstoned while no other live row points at it. The guard counts
//! live referrers through [`AssociationGraph`]; tombstoned referrers (for example a deleted
//! article that still has its join rows) never block a deletion.
//!
//! Services evaluate the guard on the same transaction that performs the delete, so the
//! check and the tombstone commit together.

use std::fmt;

use sea_orm::{ConnectionTrait, DbErr};

use crate::data::association::{
    ArticleCategory, ArticleImages, ArticleTags, AssociationGraph, DictImage, DictParent,
    EdgeKind, ReferenceKind, UserImage,
};

/// Entity kinds whose deletion is guarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Category,
    Tag,
    Image,
    Dict,
}

impl EntityKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Tag => "tag",
            Self::Image => "image",
            Self::Dict => "dict",
        }
    }
}

/// Relation that still references an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockingRelation {
    /// A live article is filed under the category.
    ArticleCategory,
    /// A live article is tagged with the tag.
    ArticleTag,
    /// A live article embeds the image.
    ArticleImage,
    /// A live user uses the image as avatar.
    UserImage,
    /// A live dict points at the image.
    DictImage,
    /// A live dict has this dict as parent.
    DictChild,
}

impl fmt::Display for BlockingRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::ArticleCategory => "article (category)",
            Self::ArticleTag => "article (tag)",
            Self::ArticleImage => "article (image)",
            Self::UserImage => "user",
            Self::DictImage => "dict",
            Self::DictChild => "child dict",
        };
        f.write_str(text)
    }
}

/// Outcome of a delete check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteVerdict {
    Allowed,
    Blocked(BlockingRelation),
}

impl DeleteVerdict {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

pub struct IntegrityGuard<'a, C: ConnectionTrait> {
    graph: AssociationGraph<'a, C>,
}

impl<'a, C: ConnectionTrait> IntegrityGuard<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self {
            graph: AssociationGraph::new(db),
        }
    }

    /// Determines whether the entity can be deleted.
    ///
    /// For images the relations are checked in a fixed order (articles, then users, then
    /// dicts) and the first blocking one is reported.
    ///
    /// # Arguments
    /// - `kind` - Kind of entity to delete
    /// - `id` - ID of the entity
    ///
    /// # Returns
    /// - `Ok(DeleteVerdict::Allowed)` - No live row references the entity
    /// - `Ok(DeleteVerdict::Blocked(relation))` - First relation found still referencing it
    /// - `Err(DbErr)` - Database error
    pub async fn can_delete(&self, kind: EntityKind, id: i32) -> Result<DeleteVerdict, DbErr> {
        let blocking = match kind {
            EntityKind::Category => self
                .referenced::<ArticleCategory>(id, BlockingRelation::ArticleCategory)
                .await?,
            EntityKind::Tag => {
                self.edged::<ArticleTags>(id, BlockingRelation::ArticleTag)
                    .await?
            }
            EntityKind::Image => {
                if let Some(relation) = self
                    .edged::<ArticleImages>(id, BlockingRelation::ArticleImage)
                    .await?
                {
                    Some(relation)
                } else if let Some(relation) = self
                    .referenced::<UserImage>(id, BlockingRelation::UserImage)
                    .await?
                {
                    Some(relation)
                } else {
                    self.referenced::<DictImage>(id, BlockingRelation::DictImage)
                        .await?
                }
            }
            EntityKind::Dict => {
                self.referenced::<DictParent>(id, BlockingRelation::DictChild)
                    .await?
            }
        };

        Ok(match blocking {
            Some(relation) => DeleteVerdict::Blocked(relation),
            None => DeleteVerdict::Allowed,
        })
    }

    async fn edged<K: EdgeKind>(
        &self,
        id: i32,
        relation: BlockingRelation,
    ) -> Result<Option<BlockingRelation>, DbErr> {
        let count = self.graph.count_live_owners::<K>(id).await?;
        Ok((count > 0).then_some(relation))
    }

    async fn referenced<K: ReferenceKind>(
        &self,
        id: i32,
        relation: BlockingRelation,
    ) -> Result<Option<BlockingRelation>, DbErr> {
        let count = self.graph.count_referrers::<K>(id).await?;
        Ok((count > 0).then_some(relation))
    }
}
