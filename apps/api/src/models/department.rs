//! Department models

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Department from the departments table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Department {
    pub id: Uuid,
    pub department_name: String,
    /// Grade applied to members of this department by default
    pub pay_grade_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sub-department owned by a department (deleted with it)
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SubDepartment {
    pub id: Uuid,
    pub department_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
