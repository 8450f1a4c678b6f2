//! Mutation result payloads
//!
//! Create and update return the saved record; delete returns how many
//! records were removed.

use async_graphql::SimpleObject;

use super::{Course, Department, Employee, Employer, Grade, Payroll, Title};

/// Status reported by every successful mutation
pub const SUCCESS: &str = "Success";

#[derive(SimpleObject)]
pub struct EmployeePayload {
    pub status: String,
    pub message: String,
    pub employee: Employee,
}

#[derive(SimpleObject)]
pub struct EmployerPayload {
    pub status: String,
    pub message: String,
    pub employer: Employer,
}

#[derive(SimpleObject)]
pub struct CoursePayload {
    pub status: String,
    pub message: String,
    pub course: Course,
}

#[derive(SimpleObject)]
pub struct DepartmentPayload {
    pub status: String,
    pub message: String,
    pub department: Department,
}

#[derive(SimpleObject)]
pub struct TitlePayload {
    pub status: String,
    pub message: String,
    pub title: Title,
}

#[derive(SimpleObject)]
pub struct GradePayload {
    pub status: String,
    pub message: String,
    pub grade: Grade,
}

#[derive(SimpleObject)]
pub struct PayrollPayload {
    pub status: String,
    pub message: String,
    pub payroll: Payroll,
}

#[derive(Debug, SimpleObject)]
pub struct DeletePayload {
    pub status: String,
    pub message: String,
    pub deleted_count: u64,
}
