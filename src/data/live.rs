//! Live-row read path.
//!
//! Every table carries a nullable `deleted_at` tombstone. Normal reads must never see a
//! tombstoned row, so repositories, guards and association checks all start their queries
//! from [`Live::find_live`] instead of `EntityTrait::find`.

use std::collections::HashSet;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QuerySelect, Select, Value,
};

/// Entity with an `i32` primary key and a tombstone column.
pub trait Live: EntityTrait<Model: Sync> {
    /// Primary key column.
    const ID: Self::Column;
    /// Tombstone column; a non-null value hides the row from normal reads.
    const DELETED_AT: Self::Column;

    /// Selects rows that have not been tombstoned.
    fn find_live() -> Select<Self> {
        Self::find().filter(Self::DELETED_AT.is_null())
    }

    /// Selects the live row with the given ID, if any.
    fn find_live_by_id(id: i32) -> Select<Self> {
        Self::find_live().filter(Self::ID.eq(id))
    }
}

impl Live for entity::article::Entity {
    const ID: Self::Column = entity::article::Column::Id;
    const DELETED_AT: Self::Column = entity::article::Column::DeletedAt;
}

impl Live for entity::category::Entity {
    const ID: Self::Column = entity::category::Column::Id;
    const DELETED_AT: Self::Column = entity::category::Column::DeletedAt;
}

impl Live for entity::tag::Entity {
    const ID: Self::Column = entity::tag::Column::Id;
    const DELETED_AT: Self::Column = entity::tag::Column::DeletedAt;
}

impl Live for entity::image::Entity {
    const ID: Self::Column = entity::image::Column::Id;
    const DELETED_AT: Self::Column = entity::image::Column::DeletedAt;
}

impl Live for entity::dict::Entity {
    const ID: Self::Column = entity::dict::Column::Id;
    const DELETED_AT: Self::Column = entity::dict::Column::DeletedAt;
}

impl Live for entity::user::Entity {
    const ID: Self::Column = entity::user::Column::Id;
    const DELETED_AT: Self::Column = entity::user::Column::DeletedAt;
}

/// Checks whether a live row with the given ID exists.
pub async fn exists<E, C>(db: &C, id: i32) -> Result<bool, DbErr>
where
    E: Live,
    C: ConnectionTrait,
{
    Ok(E::find_live_by_id(id).count(db).await? > 0)
}

/// Returns the subset of `ids` that resolve to live rows.
///
/// Input order is preserved and duplicates are collapsed to their first occurrence.
pub async fn existing_ids<E, C>(db: &C, ids: &[i32]) -> Result<Vec<i32>, DbErr>
where
    E: Live,
    C: ConnectionTrait,
{
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let found: HashSet<i32> = E::find_live()
        .select_only()
        .column(E::ID)
        .filter(E::ID.is_in(ids.to_vec()))
        .into_tuple::<i32>()
        .all(db)
        .await?
        .into_iter()
        .collect();

    let mut seen = HashSet::new();
    Ok(ids
        .iter()
        .copied()
        .filter(|id| found.contains(id) && seen.insert(*id))
        .collect())
}

/// Checks whether a live row other than `exclude_id` already holds `value` in `column`.
///
/// Fast-path uniqueness check; the live-row unique indexes remain the source of truth.
pub async fn value_taken<E, C, V>(
    db: &C,
    column: E::Column,
    value: V,
    exclude_id: Option<i32>,
) -> Result<bool, DbErr>
where
    E: Live,
    C: ConnectionTrait,
    V: Into<Value>,
{
    let mut query = E::find_live().filter(column.eq(value));
    if let Some(id) = exclude_id {
        query = query.filter(E::ID.ne(id));
    }

    Ok(query.count(db).await? > 0)
}

/// Tombstones the live row with the given ID.
///
/// # Returns
/// - `Ok(true)` - Row was live and is now tombstoned
/// - `Ok(false)` - No live row with that ID
pub async fn tombstone<E, C>(db: &C, id: i32) -> Result<bool, DbErr>
where
    E: Live,
    C: ConnectionTrait,
{
    let result = E::update_many()
        .col_expr(E::DELETED_AT, Expr::value(Utc::now()))
        .filter(E::ID.eq(id))
        .filter(E::DELETED_AT.is_null())
        .exec(db)
        .await?;

    Ok(result.rows_affected > 0)
}
