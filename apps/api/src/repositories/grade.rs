//! Grade repository

use sqlx::PgPool;
use uuid::Uuid;

use super::search::{SearchField, Searchable};
use super::utils::GRADE_COLUMNS;
use crate::models::Grade;

impl Searchable for Grade {
    const TABLE: &'static str = "grades";
    const RESOURCE: &'static str = "Grade";
    const COLUMNS: &'static str = GRADE_COLUMNS;
    const SEARCH_FIELDS: &'static [SearchField] = &[
        SearchField::Column("grade_name"),
        SearchField::Column("grade_basic"),
        SearchField::Column("grade_da"),
        SearchField::Column("grade_ta"),
        SearchField::Column("grade_bonus"),
        SearchField::Column("grade_pf"),
    ];
}

/// Values for a new grade
#[derive(Debug, Clone)]
pub struct NewGrade {
    pub grade_name: String,
    pub grade_basic: String,
    pub grade_da: String,
    pub grade_ta: String,
    pub grade_bonus: f64,
    pub grade_pf: String,
}

/// Partial update; `None` leaves the column unchanged
#[derive(Debug, Clone, Default)]
pub struct GradeChanges {
    pub grade_name: Option<String>,
    pub grade_basic: Option<String>,
    pub grade_da: Option<String>,
    pub grade_ta: Option<String>,
    pub grade_bonus: Option<f64>,
    pub grade_pf: Option<String>,
}

/// Repository for grade database operations
#[derive(Clone)]
pub struct GradeRepository {
    pool: PgPool,
}

impl GradeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a grade
    pub async fn create(&self, grade: &NewGrade) -> Result<Grade, sqlx::Error> {
        let sql = format!(
            r#"
            INSERT INTO grades (grade_name, grade_basic, grade_da, grade_ta, grade_bonus, grade_pf)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {GRADE_COLUMNS}
            "#
        );
        sqlx::query_as::<_, Grade>(&sql)
            .bind(&grade.grade_name)
            .bind(&grade.grade_basic)
            .bind(&grade.grade_da)
            .bind(&grade.grade_ta)
            .bind(grade.grade_bonus)
            .bind(&grade.grade_pf)
            .fetch_one(&self.pool)
            .await
    }

    /// Apply a partial update
    ///
    /// # Returns
    /// * `Ok(None)` - If no grade with the given ID exists
    pub async fn update(
        &self,
        id: Uuid,
        changes: &GradeChanges,
    ) -> Result<Option<Grade>, sqlx::Error> {
        let sql = format!(
            r#"
            UPDATE grades SET
                grade_name = COALESCE($2, grade_name),
                grade_basic = COALESCE($3, grade_basic),
                grade_da = COALESCE($4, grade_da),
                grade_ta = COALESCE($5, grade_ta),
                grade_bonus = COALESCE($6, grade_bonus),
                grade_pf = COALESCE($7, grade_pf),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {GRADE_COLUMNS}
            "#
        );
        sqlx::query_as::<_, Grade>(&sql)
            .bind(id)
            .bind(&changes.grade_name)
            .bind(&changes.grade_basic)
            .bind(&changes.grade_da)
            .bind(&changes.grade_ta)
            .bind(changes.grade_bonus)
            .bind(&changes.grade_pf)
            .fetch_optional(&self.pool)
            .await
    }
}
