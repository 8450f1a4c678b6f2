//! Job title repository

use sqlx::PgPool;
use uuid::Uuid;

use super::search::{SearchField, Searchable};
use super::utils::TITLE_COLUMNS;
use crate::models::Title;

impl Searchable for Title {
    const TABLE: &'static str = "titles";
    const RESOURCE: &'static str = "Title";
    const COLUMNS: &'static str = TITLE_COLUMNS;
    const SEARCH_FIELDS: &'static [SearchField] = &[SearchField::Column("title_name")];
}

/// Repository for job title database operations
#[derive(Clone)]
pub struct TitleRepository {
    pool: PgPool,
}

impl TitleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, title_name: &str) -> Result<Title, sqlx::Error> {
        let sql = format!("INSERT INTO titles (title_name) VALUES ($1) RETURNING {TITLE_COLUMNS}");
        sqlx::query_as::<_, Title>(&sql)
            .bind(title_name)
            .fetch_one(&self.pool)
            .await
    }

    /// Rename a title; `Ok(None)` when it does not exist
    pub async fn update(
        &self,
        id: Uuid,
        title_name: Option<&str>,
    ) -> Result<Option<Title>, sqlx::Error> {
        let sql = format!(
            r#"
            UPDATE titles SET
                title_name = COALESCE($2, title_name),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {TITLE_COLUMNS}
            "#
        );
        sqlx::query_as::<_, Title>(&sql)
            .bind(id)
            .bind(title_name)
            .fetch_optional(&self.pool)
            .await
    }
}
