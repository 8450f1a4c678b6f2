//! Payroll repository

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use super::search::{SearchField, Searchable};
use super::utils::PAYROLL_COLUMNS;
use crate::models::Payroll;

impl Searchable for Payroll {
    const TABLE: &'static str = "payrolls";
    const RESOURCE: &'static str = "Payroll";
    const COLUMNS: &'static str = PAYROLL_COLUMNS;
    const SEARCH_FIELDS: &'static [SearchField] = &[
        SearchField::Column("period_number"),
        SearchField::Column("employee_net_salary"),
        SearchField::Column("employee_gross_salary"),
        SearchField::Column("reimbursment_date"),
        SearchField::Related {
            from: "employees e",
            on: "e.id = t.employee_id",
            columns: &["e.first_name"],
        },
        SearchField::Related {
            from: "grades g",
            on: "g.id = t.grade_id",
            columns: &["g.grade_name"],
        },
    ];
}

/// Values for a new payroll entry
#[derive(Debug, Clone)]
pub struct NewPayroll {
    pub period_number: i32,
    pub employee_net_salary: f64,
    pub employee_gross_salary: f64,
    pub reimbursment_date: NaiveDate,
    pub employee_id: Option<Uuid>,
    pub grade_id: Option<Uuid>,
}

/// Partial update; `None` leaves the column unchanged
#[derive(Debug, Clone, Default)]
pub struct PayrollChanges {
    pub period_number: Option<i32>,
    pub employee_net_salary: Option<f64>,
    pub employee_gross_salary: Option<f64>,
    pub reimbursment_date: Option<NaiveDate>,
    pub employee_id: Option<Uuid>,
    pub grade_id: Option<Uuid>,
}

/// Repository for payroll database operations
#[derive(Clone)]
pub struct PayrollRepository {
    pool: PgPool,
}

impl PayrollRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payroll: &NewPayroll) -> Result<Payroll, sqlx::Error> {
        let sql = format!(
            r#"
            INSERT INTO payrolls (
                period_number, employee_net_salary, employee_gross_salary,
                reimbursment_date, employee_id, grade_id
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {PAYROLL_COLUMNS}
            "#
        );
        sqlx::query_as::<_, Payroll>(&sql)
            .bind(payroll.period_number)
            .bind(payroll.employee_net_salary)
            .bind(payroll.employee_gross_salary)
            .bind(payroll.reimbursment_date)
            .bind(payroll.employee_id)
            .bind(payroll.grade_id)
            .fetch_one(&self.pool)
            .await
    }

    /// Apply a partial update; `Ok(None)` when the entry does not exist
    pub async fn update(
        &self,
        id: Uuid,
        changes: &PayrollChanges,
    ) -> Result<Option<Payroll>, sqlx::Error> {
        let sql = format!(
            r#"
            UPDATE payrolls SET
                period_number = COALESCE($2, period_number),
                employee_net_salary = COALESCE($3, employee_net_salary),
                employee_gross_salary = COALESCE($4, employee_gross_salary),
                reimbursment_date = COALESCE($5, reimbursment_date),
                employee_id = COALESCE($6, employee_id),
                grade_id = COALESCE($7, grade_id),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {PAYROLL_COLUMNS}
            "#
        );
        sqlx::query_as::<_, Payroll>(&sql)
            .bind(id)
            .bind(changes.period_number)
            .bind(changes.employee_net_salary)
            .bind(changes.employee_gross_salary)
            .bind(changes.reimbursment_date)
            .bind(changes.employee_id)
            .bind(changes.grade_id)
            .fetch_optional(&self.pool)
            .await
    }
}
