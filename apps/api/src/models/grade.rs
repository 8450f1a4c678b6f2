//! Pay grade model

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Pay grade from the grades table.
///
/// Allowance columns (DA, TA, PF) are free text because payroll offices
/// record them as either amounts or percentages.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Grade {
    pub id: Uuid,
    pub grade_name: String,
    /// Basic pay
    pub grade_basic: String,
    /// Dearness allowance
    pub grade_da: String,
    /// Travel allowance
    pub grade_ta: String,
    pub grade_bonus: f64,
    /// Provident fund contribution
    pub grade_pf: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
