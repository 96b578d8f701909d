//! Edges between catalog entities.
//!
//! Many-to-many edges (article to image, article to tag) are explicit join rows with a
//! composite primary key. One-to-many and tree edges (user to image, dict to image, dict to
//! parent dict, article to category) are a single nullable or required foreign key on the
//! child row. All edge reads and writes go through [`AssociationGraph`].
//!
//! Target IDs that do not resolve to a live row are skipped rather than rejected; the
//! operations return the IDs they actually applied so callers can see what was dropped.

use std::collections::{BTreeMap, HashSet};

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};

use crate::data::live::{self, Live};

/// A many-to-many edge stored as join rows.
pub trait EdgeKind {
    /// Join table entity.
    type Join: EntityTrait<Model: Sync>;
    /// Entity owning the edge set.
    type Owner: Live;
    /// Entity the edges point at.
    type Target: Live;
    /// Join row active model.
    type Edge: ActiveModelTrait<Entity = Self::Join> + Send;

    /// Join column holding the owner ID.
    const OWNER: <Self::Join as EntityTrait>::Column;
    /// Join column holding the target ID.
    const TARGET: <Self::Join as EntityTrait>::Column;
    /// Relation name used in logs and integrity messages.
    const NAME: &'static str;

    fn edge(owner_id: i32, target_id: i32) -> Self::Edge;
}

/// A one-to-many edge stored as a foreign key on the child row.
pub trait ReferenceKind {
    /// Entity carrying the foreign key.
    type Child: Live;
    /// Entity the foreign key points at.
    type Target: Live;

    const COLUMN: <Self::Child as EntityTrait>::Column;
    const NAME: &'static str;
}

pub struct ArticleImages;

impl EdgeKind for ArticleImages {
    type Join = entity::article_image::Entity;
    type Owner = entity::article::Entity;
    type Target = entity::image::Entity;
    type Edge = entity::article_image::ActiveModel;

    const OWNER: entity::article_image::Column = entity::article_image::Column::ArticleId;
    const TARGET: entity::article_image::Column = entity::article_image::Column::ImageId;
    const NAME: &'static str = "article images";

    fn edge(owner_id: i32, target_id: i32) -> Self::Edge {
        entity::article_image::ActiveModel {
            article_id: sea_orm::ActiveValue::Set(owner_id),
            image_id: sea_orm::ActiveValue::Set(target_id),
        }
    }
}

pub struct ArticleTags;

impl EdgeKind for ArticleTags {
    type Join = entity::article_tag::Entity;
    type Owner = entity::article::Entity;
    type Target = entity::tag::Entity;
    type Edge = entity::article_tag::ActiveModel;

    const OWNER: entity::article_tag::Column = entity::article_tag::Column::ArticleId;
    const TARGET: entity::article_tag::Column = entity::article_tag::Column::TagId;
    const NAME: &'static str = "article tags";

    fn edge(owner_id: i32, target_id: i32) -> Self::Edge {
        entity::article_tag::ActiveModel {
            article_id: sea_orm::ActiveValue::Set(owner_id),
            tag_id: sea_orm::ActiveValue::Set(target_id),
        }
    }
}

pub struct ArticleCategory;

impl ReferenceKind for ArticleCategory {
    type Child = entity::article::Entity;
    type Target = entity::category::Entity;

    const COLUMN: entity::article::Column = entity::article::Column::CategoryId;
    const NAME: &'static str = "article category";
}

pub struct UserImage;

impl ReferenceKind for UserImage {
    type Child = entity::user::Entity;
    type Target = entity::image::Entity;

    const COLUMN: entity::user::Column = entity::user::Column::ImageId;
    const NAME: &'static str = "user avatar";
}

pub struct DictImage;

impl ReferenceKind for DictImage {
    type Child = entity::dict::Entity;
    type Target = entity::image::Entity;

    const COLUMN: entity::dict::Column = entity::dict::Column::ImageId;
    const NAME: &'static str = "dict image";
}

pub struct DictParent;

impl ReferenceKind for DictParent {
    type Child = entity::dict::Entity;
    type Target = entity::dict::Entity;

    const COLUMN: entity::dict::Column = entity::dict::Column::ParentId;
    const NAME: &'static str = "dict parent";
}

pub struct AssociationGraph<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AssociationGraph<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the target IDs of an owner's edges in ascending order.
    pub async fn targets<K: EdgeKind>(&self, owner_id: i32) -> Result<Vec<i32>, DbErr> {
        K::Join::find()
            .select_only()
            .column(K::TARGET)
            .filter(K::OWNER.eq(owner_id))
            .order_by_asc(K::TARGET)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Gets the target IDs for several owners in one query.
    ///
    /// Owners without edges map to an empty list.
    pub async fn targets_for_owners<K: EdgeKind>(
        &self,
        owner_ids: &[i32],
    ) -> Result<BTreeMap<i32, Vec<i32>>, DbErr> {
        let mut map: BTreeMap<i32, Vec<i32>> =
            owner_ids.iter().map(|id| (*id, Vec::new())).collect();

        if owner_ids.is_empty() {
            return Ok(map);
        }

        let rows: Vec<(i32, i32)> = K::Join::find()
            .select_only()
            .column(K::OWNER)
            .column(K::TARGET)
            .filter(K::OWNER.is_in(owner_ids.to_vec()))
            .order_by_asc(K::OWNER)
            .order_by_asc(K::TARGET)
            .into_tuple()
            .all(self.db)
            .await?;

        for (owner_id, target_id) in rows {
            map.entry(owner_id).or_default().push(target_id);
        }

        Ok(map)
    }

    /// Adds edges from an owner to each live target, keeping existing edges.
    ///
    /// Safe to repeat with overlapping ID sets; an edge that already exists is not
    /// inserted again. IDs without a live target are skipped.
    ///
    /// # Arguments
    /// - `owner_id` - ID of the owning row
    /// - `target_ids` - Requested target IDs, possibly with duplicates or unknown IDs
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Deduplicated live target IDs from the request, in request order
    /// - `Err(DbErr)` - Database error
    pub async fn append<K: EdgeKind>(
        &self,
        owner_id: i32,
        target_ids: &[i32],
    ) -> Result<Vec<i32>, DbErr> {
        let valid = self.validated_targets::<K>(owner_id, target_ids).await?;
        let current: HashSet<i32> = self.targets::<K>(owner_id).await?.into_iter().collect();

        let added: Vec<i32> = valid
            .iter()
            .copied()
            .filter(|id| !current.contains(id))
            .collect();
        self.insert_edges::<K>(owner_id, &added).await?;

        Ok(valid)
    }

    /// Sets an owner's edge set to exactly the live targets in `target_ids`.
    ///
    /// Edges to IDs outside the new set are removed, new IDs are added and edges present
    /// in both are left as they are. An empty list clears every edge of the owner.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Deduplicated live target IDs now on the owner, in request order
    /// - `Err(DbErr)` - Database error
    pub async fn replace<K: EdgeKind>(
        &self,
        owner_id: i32,
        target_ids: &[i32],
    ) -> Result<Vec<i32>, DbErr> {
        let valid = self.validated_targets::<K>(owner_id, target_ids).await?;
        let current = self.targets::<K>(owner_id).await?;

        let keep: HashSet<i32> = valid.iter().copied().collect();
        let removed: Vec<i32> = current
            .iter()
            .copied()
            .filter(|id| !keep.contains(id))
            .collect();
        let added: Vec<i32> = valid
            .iter()
            .copied()
            .filter(|id| !current.contains(id))
            .collect();

        if !removed.is_empty() {
            K::Join::delete_many()
                .filter(K::OWNER.eq(owner_id))
                .filter(K::TARGET.is_in(removed))
                .exec(self.db)
                .await?;
        }
        self.insert_edges::<K>(owner_id, &added).await?;

        Ok(valid)
    }

    /// Counts edges pointing at a target from owners that are still live.
    pub async fn count_live_owners<K: EdgeKind>(&self, target_id: i32) -> Result<u64, DbErr> {
        let live_owners = K::Owner::find_live()
            .select_only()
            .column(<K::Owner as Live>::ID)
            .into_query();

        K::Join::find()
            .filter(K::TARGET.eq(target_id))
            .filter(K::OWNER.in_subquery(live_owners))
            .count(self.db)
            .await
    }

    /// Points a child's foreign key at `target_id`, or detaches it with `None`.
    ///
    /// Moving a child from one owner to another is a single column update.
    ///
    /// # Returns
    /// - `Ok(true)` - Reference written
    /// - `Ok(false)` - `target_id` does not resolve to a live row; nothing changed
    /// - `Err(DbErr)` - Database error
    pub async fn set_reference<K: ReferenceKind>(
        &self,
        child_id: i32,
        target_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        if let Some(target_id) = target_id {
            if !live::exists::<K::Target, C>(self.db, target_id).await? {
                tracing::debug!(
                    relation = K::NAME,
                    child_id,
                    target_id,
                    "Reference target missing"
                );
                return Ok(false);
            }
        }

        K::Child::update_many()
            .col_expr(K::COLUMN, Expr::value(target_id))
            .filter(<K::Child as Live>::ID.eq(child_id))
            .exec(self.db)
            .await?;

        Ok(true)
    }

    /// Gets the IDs of live children referencing a target, in ascending order.
    pub async fn referrers<K: ReferenceKind>(&self, target_id: i32) -> Result<Vec<i32>, DbErr> {
        K::Child::find_live()
            .select_only()
            .column(<K::Child as Live>::ID)
            .filter(K::COLUMN.eq(target_id))
            .order_by_asc(<K::Child as Live>::ID)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Counts live children referencing a target.
    pub async fn count_referrers<K: ReferenceKind>(&self, target_id: i32) -> Result<u64, DbErr> {
        K::Child::find_live()
            .filter(K::COLUMN.eq(target_id))
            .count(self.db)
            .await
    }

    async fn validated_targets<K: EdgeKind>(
        &self,
        owner_id: i32,
        target_ids: &[i32],
    ) -> Result<Vec<i32>, DbErr> {
        let valid = live::existing_ids::<K::Target, C>(self.db, target_ids).await?;

        let skipped: Vec<i32> = target_ids
            .iter()
            .copied()
            .filter(|id| !valid.contains(id))
            .collect();
        if !skipped.is_empty() {
            tracing::debug!(
                relation = K::NAME,
                owner_id,
                ?skipped,
                "Skipping edge targets that do not exist"
            );
        }

        Ok(valid)
    }

    async fn insert_edges<K: EdgeKind>(
        &self,
        owner_id: i32,
        target_ids: &[i32],
    ) -> Result<(), DbErr> {
        if target_ids.is_empty() {
            return Ok(());
        }

        K::Join::insert_many(target_ids.iter().map(|id| K::edge(owner_id, *id)))
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }
}
