//! Generic search, listing and bulk delete over one table
//!
//! Each listable model implements [`Searchable`], declaring its table, its
//! SELECT columns and the fields a free-text search is matched against. The
//! functions here turn that declaration into SQL, so every collection is
//! filtered, counted, ordered and sliced the same way.
//!
//! The base table is always aliased `t`. A search term matches a row when any
//! declared field contains it, case-insensitively.

use std::collections::HashSet;

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgExecutor, PgPool};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

/// One field a search term is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Column of the base table, compared as text
    Column(&'static str),

    /// Columns reached through a relation.
    ///
    /// Rendered as an `EXISTS` subquery so many-to-many relations never
    /// duplicate base rows. `from` may contain joins; `on` correlates the
    /// subquery with `t`; `columns` must be qualified with the aliases used in
    /// `from`.
    Related {
        from: &'static str,
        on: &'static str,
        columns: &'static [&'static str],
    },
}

impl SearchField {
    /// SQL predicate for this field, matching against placeholder `$param`
    fn predicate(&self, param: usize) -> String {
        match self {
            Self::Column(column) => format!("t.{column}::text ILIKE ${param}"),
            Self::Related { from, on, columns } => {
                let matches = columns
                    .iter()
                    .map(|column| format!("{column}::text ILIKE ${param}"))
                    .collect::<Vec<_>>()
                    .join(" OR ");
                format!("EXISTS (SELECT 1 FROM {from} WHERE {on} AND ({matches}))")
            }
        }
    }
}

/// A table that can be listed with search and pagination
pub trait Searchable: for<'r> FromRow<'r, PgRow> + Send + Unpin + 'static {
    /// Table name
    const TABLE: &'static str;

    /// Resource name used in error messages
    const RESOURCE: &'static str;

    /// SELECT column list
    const COLUMNS: &'static str;

    /// Fields matched by a search term
    const SEARCH_FIELDS: &'static [SearchField];
}

/// Build the WHERE clause for a search, bound to placeholder `$param`.
///
/// Returns an empty string when `fields` is empty.
pub fn search_clause(fields: &[SearchField], param: usize) -> String {
    if fields.is_empty() {
        return String::new();
    }
    let predicates = fields
        .iter()
        .map(|field| field.predicate(param))
        .collect::<Vec<_>>()
        .join(" OR ");
    format!("WHERE ({predicates})")
}

/// Fetch one slice of a collection in its natural order.
///
/// # Arguments
/// * `pattern` - ILIKE pattern from [`super::utils::search_pattern`], `None` for no filter
/// * `limit` - Maximum rows, `None` for all remaining rows
/// * `offset` - Number of rows to skip
pub async fn list<'e, T: Searchable>(
    executor: impl PgExecutor<'e>,
    pattern: Option<&str>,
    limit: Option<i64>,
    offset: i64,
) -> Result<Vec<T>, sqlx::Error> {
    match pattern {
        Some(pattern) => {
            let sql = format!(
                "SELECT {} FROM {} t {} ORDER BY t.created_at DESC, t.id DESC LIMIT $2 OFFSET $3",
                T::COLUMNS,
                T::TABLE,
                search_clause(T::SEARCH_FIELDS, 1),
            );
            sqlx::query_as::<_, T>(&sql)
                .bind(pattern)
                .bind(limit)
                .bind(offset)
                .fetch_all(executor)
                .await
        }
        None => {
            let sql = format!(
                "SELECT {} FROM {} t ORDER BY t.created_at DESC, t.id DESC LIMIT $1 OFFSET $2",
                T::COLUMNS,
                T::TABLE,
            );
            // LIMIT NULL is LIMIT ALL in PostgreSQL
            sqlx::query_as::<_, T>(&sql)
                .bind(limit)
                .bind(offset)
                .fetch_all(executor)
                .await
        }
    }
}

/// Count the rows matching a search pattern
pub async fn count<'e, T: Searchable>(
    executor: impl PgExecutor<'e>,
    pattern: Option<&str>,
) -> Result<i64, sqlx::Error> {
    match pattern {
        Some(pattern) => {
            let sql = format!(
                "SELECT COUNT(*) FROM {} t {}",
                T::TABLE,
                search_clause(T::SEARCH_FIELDS, 1)
            );
            sqlx::query_scalar(&sql).bind(pattern).fetch_one(executor).await
        }
        None => {
            let sql = format!("SELECT COUNT(*) FROM {} t", T::TABLE);
            sqlx::query_scalar(&sql).fetch_one(executor).await
        }
    }
}

/// One slice of a collection together with the total matching count.
///
/// Both queries read the same snapshot, so the count always agrees with the
/// rows returned even while other requests write.
pub async fn page<T: Searchable>(
    pool: &PgPool,
    pattern: Option<&str>,
    limit: Option<i64>,
    offset: i64,
) -> Result<(Vec<T>, i64), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
        .execute(&mut *tx)
        .await?;

    let items = list::<T>(&mut *tx, pattern, limit, offset).await?;
    let count = count::<T>(&mut *tx, pattern).await?;

    tx.commit().await?;

    Ok((items, count))
}

/// Find a record by ID
pub async fn find_by_id<T: Searchable>(pool: &PgPool, id: Uuid) -> Result<Option<T>, sqlx::Error> {
    let sql = format!("SELECT {} FROM {} WHERE id = $1", T::COLUMNS, T::TABLE);
    sqlx::query_as::<_, T>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Find a record by ID, failing with `NOT_FOUND` when it does not exist
pub async fn get_by_id<T: Searchable>(pool: &PgPool, id: Uuid) -> ApiResult<T> {
    find_by_id::<T>(pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found(T::RESOURCE, id.to_string()))
}

/// Check that every ID exists, failing with `NOT_FOUND` on the first missing one
pub async fn ensure_exist<T: Searchable>(pool: &PgPool, ids: &[Uuid]) -> ApiResult<()> {
    let sql = format!("SELECT id FROM {} WHERE id = ANY($1)", T::TABLE);
    let found: HashSet<Uuid> = sqlx::query_scalar::<_, Uuid>(&sql)
        .bind(ids)
        .fetch_all(pool)
        .await?
        .into_iter()
        .collect();

    match ids.iter().find(|id| !found.contains(id)) {
        Some(missing) => Err(ApiError::not_found(T::RESOURCE, missing.to_string())),
        None => Ok(()),
    }
}

/// Delete records by ID in one transaction.
///
/// Every ID must exist; otherwise nothing is deleted and `NOT_FOUND` names the
/// first missing one. Returns the number of deleted rows.
pub async fn delete_many<T: Searchable>(pool: &PgPool, ids: &[Uuid]) -> ApiResult<u64> {
    let mut unique = Vec::with_capacity(ids.len());
    let mut seen = HashSet::with_capacity(ids.len());
    for id in ids {
        if seen.insert(*id) {
            unique.push(*id);
        }
    }

    let mut tx = pool.begin().await?;

    let sql = format!("SELECT id FROM {} WHERE id = ANY($1) FOR UPDATE", T::TABLE);
    let found: HashSet<Uuid> = sqlx::query_scalar::<_, Uuid>(&sql)
        .bind(&unique)
        .fetch_all(&mut *tx)
        .await?
        .into_iter()
        .collect();

    if let Some(missing) = unique.iter().find(|id| !found.contains(id)) {
        tx.rollback().await?;
        return Err(ApiError::not_found(T::RESOURCE, missing.to_string()));
    }

    let sql = format!("DELETE FROM {} WHERE id = ANY($1)", T::TABLE);
    let result = sqlx::query(&sql).bind(&unique).execute(&mut *tx).await?;

    tx.commit().await?;

    tracing::info!(
        table = T::TABLE,
        deleted = result.rows_affected(),
        "Deleted records"
    );

    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[SearchField] = &[
        SearchField::Column("first_name"),
        SearchField::Related {
            from: "employee_departments ed JOIN departments d ON d.id = ed.department_id",
            on: "ed.employee_id = t.id",
            columns: &["d.department_name"],
        },
    ];

    #[test]
    fn test_column_predicate() {
        assert_eq!(
            SearchField::Column("email").predicate(1),
            "t.email::text ILIKE $1"
        );
    }

    #[test]
    fn test_related_predicate_uses_exists() {
        let field = SearchField::Related {
            from: "employers er LEFT JOIN users eu ON eu.id = er.user_id",
            on: "er.id = t.employer_id",
            columns: &["er.business_name", "eu.username"],
        };
        assert_eq!(
            field.predicate(1),
            "EXISTS (SELECT 1 FROM employers er LEFT JOIN users eu ON eu.id = er.user_id \
             WHERE er.id = t.employer_id AND \
             (er.business_name::text ILIKE $1 OR eu.username::text ILIKE $1))"
        );
    }

    #[test]
    fn test_search_clause_ors_every_field() {
        let clause = search_clause(FIELDS, 1);
        assert!(clause.starts_with("WHERE (t.first_name::text ILIKE $1 OR EXISTS"));
        assert_eq!(clause.matches("ILIKE $1").count(), 2);
        assert!(clause.ends_with("))"));
    }

    #[test]
    fn test_search_clause_empty_fields() {
        assert_eq!(search_clause(&[], 1), "");
    }
}
