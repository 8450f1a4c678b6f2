//! Payroll model

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Payroll run for one employee and period
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Payroll {
    pub id: Uuid,
    pub period_number: i32,
    pub employee_net_salary: f64,
    pub employee_gross_salary: f64,
    pub reimbursment_date: NaiveDate,
    pub employee_id: Option<Uuid>,
    pub grade_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
