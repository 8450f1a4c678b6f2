//! Department repository
//!
//! Sub-departments are owned by their department and only ever added.

use sqlx::PgPool;
use uuid::Uuid;

use super::search::{SearchField, Searchable};
use super::utils::DEPARTMENT_COLUMNS;
use crate::models::{Department, SubDepartment};

impl Searchable for Department {
    const TABLE: &'static str = "departments";
    const RESOURCE: &'static str = "Department";
    const COLUMNS: &'static str = DEPARTMENT_COLUMNS;
    const SEARCH_FIELDS: &'static [SearchField] = &[
        SearchField::Column("department_name"),
        SearchField::Related {
            from: "grades g",
            on: "g.id = t.pay_grade_id",
            columns: &["g.grade_name"],
        },
    ];
}

/// Repository for department database operations
#[derive(Clone)]
pub struct DepartmentRepository {
    pool: PgPool,
}

impl DepartmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a department together with its sub-departments
    pub async fn create(
        &self,
        department_name: &str,
        pay_grade_id: Option<Uuid>,
        sub_departments: &[String],
    ) -> Result<Department, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            r#"
            INSERT INTO departments (department_name, pay_grade_id)
            VALUES ($1, $2)
            RETURNING {DEPARTMENT_COLUMNS}
            "#
        );
        let department = sqlx::query_as::<_, Department>(&sql)
            .bind(department_name)
            .bind(pay_grade_id)
            .fetch_one(&mut *tx)
            .await?;

        insert_sub_departments(&mut tx, department.id, sub_departments).await?;

        tx.commit().await?;
        Ok(department)
    }

    /// Apply a partial update and append sub-departments
    ///
    /// # Returns
    /// * `Ok(None)` - If no department with the given ID exists
    pub async fn update(
        &self,
        id: Uuid,
        department_name: Option<&str>,
        pay_grade_id: Option<Uuid>,
        sub_departments: &[String],
    ) -> Result<Option<Department>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            r#"
            UPDATE departments SET
                department_name = COALESCE($2, department_name),
                pay_grade_id = COALESCE($3, pay_grade_id),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {DEPARTMENT_COLUMNS}
            "#
        );
        let department = sqlx::query_as::<_, Department>(&sql)
            .bind(id)
            .bind(department_name)
            .bind(pay_grade_id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(department) = department else {
            return Ok(None);
        };

        insert_sub_departments(&mut tx, department.id, sub_departments).await?;

        tx.commit().await?;
        Ok(Some(department))
    }

    /// Sub-departments of a department, oldest first
    pub async fn sub_departments(
        &self,
        department_id: Uuid,
    ) -> Result<Vec<SubDepartment>, sqlx::Error> {
        sqlx::query_as::<_, SubDepartment>(
            r#"
            SELECT id, department_id, name, created_at
            FROM sub_departments
            WHERE department_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(department_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Departments an employee belongs to, by name
    pub async fn find_by_employee(
        &self,
        employee_id: Uuid,
    ) -> Result<Vec<Department>, sqlx::Error> {
        sqlx::query_as::<_, Department>(
            r#"
            SELECT d.id, d.department_name, d.pay_grade_id, d.created_at, d.updated_at
            FROM departments d
            JOIN employee_departments ed ON ed.department_id = d.id
            WHERE ed.employee_id = $1
            ORDER BY d.department_name, d.id
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await
    }
}

async fn insert_sub_departments(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    department_id: Uuid,
    names: &[String],
) -> Result<(), sqlx::Error> {
    if names.is_empty() {
        return Ok(());
    }
    sqlx::query(
        r#"
        INSERT INTO sub_departments (department_id, name)
        SELECT $1, name FROM UNNEST($2::text[]) AS name
        "#,
    )
    .bind(department_id)
    .bind(names)
    .execute(&mut **tx)
    .await?;
    Ok(())
}
