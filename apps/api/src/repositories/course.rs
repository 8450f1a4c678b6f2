//! Course repository
//!
//! Courses are unique per (name, level); violations surface as `CONFLICT`.

use sqlx::PgPool;
use uuid::Uuid;

use super::search::{SearchField, Searchable};
use super::utils::COURSE_COLUMNS;
use crate::error::{ApiError, ApiResult};
use crate::models::{Choice, Course, CourseLevel};

impl Searchable for Course {
    const TABLE: &'static str = "courses";
    const RESOURCE: &'static str = "Course";
    const COLUMNS: &'static str = COURSE_COLUMNS;
    const SEARCH_FIELDS: &'static [SearchField] = &[
        SearchField::Column("course_name"),
        SearchField::Column("course_level"),
    ];
}

/// Repository for course database operations
#[derive(Clone)]
pub struct CourseRepository {
    pool: PgPool,
}

impl CourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, course_name: &str, course_level: CourseLevel) -> ApiResult<Course> {
        let sql = format!(
            "INSERT INTO courses (course_name, course_level) VALUES ($1, $2) RETURNING {COURSE_COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&sql)
            .bind(course_name)
            .bind(course_level)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                map_unique_violation(e, || {
                    format!("{} ({})", course_name, course_level.label())
                })
            })
    }

    /// Apply a partial update; `Ok(None)` when the course does not exist
    pub async fn update(
        &self,
        id: Uuid,
        course_name: Option<&str>,
        course_level: Option<CourseLevel>,
    ) -> ApiResult<Option<Course>> {
        let sql = format!(
            r#"
            UPDATE courses SET
                course_name = COALESCE($2, course_name),
                course_level = COALESCE($3, course_level),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {COURSE_COLUMNS}
            "#
        );
        sqlx::query_as::<_, Course>(&sql)
            .bind(id)
            .bind(course_name)
            .bind(course_level)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                map_unique_violation(e, || {
                    "another course has the same name and level".to_string()
                })
            })
    }
}

fn map_unique_violation(err: sqlx::Error, detail: impl FnOnce() -> String) -> ApiError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => ApiError::conflict("Course", detail()),
        _ => err.into(),
    }
}
