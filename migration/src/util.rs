use sea_orm_migration::prelude::*;

/// Creates a unique index over `column` that only covers rows whose `deleted_at` is NULL.
///
/// Tombstoned rows keep their values, so a plain unique index would block re-using a name
/// after a soft delete. Partial indexes are expressed in raw SQL because both SQLite and
/// Postgres accept the same `CREATE UNIQUE INDEX ... WHERE` form.
pub async fn create_live_unique_index(
    manager: &SchemaManager<'_>,
    table: &str,
    column: &str,
) -> Result<(), DbErr> {
    let sql = format!(
        r#"CREATE UNIQUE INDEX IF NOT EXISTS "uq_{table}_{column}_live" ON "{table}" ("{column}") WHERE "deleted_at" IS NULL"#
    );

    manager.get_connection().execute_unprepared(&sql).await?;

    Ok(())
}
