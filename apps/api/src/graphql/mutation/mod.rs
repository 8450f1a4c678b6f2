//! GraphQL mutations for Workforce
//!
//! `login` is open; every other mutation requires the admin or manager role.
//! Create and update share one input type per record. On create the
//! required fields must be present; on update only the fields that are set
//! are changed.

mod auth;
mod course;
mod department;
mod employee;
mod employer;
mod grade;
mod payroll;
mod title;

pub use auth::AuthMutation;
pub use course::{CourseInput, CourseMutation};
pub use department::{DepartmentInput, DepartmentMutation};
pub use employee::{EmployeeInput, EmployeeMutation};
pub use employer::{EmployerInput, EmployerMutation};
pub use grade::{GradeInput, GradeMutation};
pub use payroll::{PayrollInput, PayrollMutation};
pub use title::{TitleInput, TitleMutation};

use async_graphql::{Context, MergedObject, ResultExt, ID};
use sqlx::PgPool;

use crate::error::ApiResult;
use crate::graphql::types::{DeletePayload, SUCCESS};
use crate::graphql::validation::parse_ids;
use crate::repositories::search::{self, Searchable};

/// Root mutation type combining all mutation domains
#[derive(MergedObject, Default)]
pub struct Mutation(
    AuthMutation,
    EmployeeMutation,
    EmployerMutation,
    CourseMutation,
    DepartmentMutation,
    TitleMutation,
    GradeMutation,
    PayrollMutation,
);

fn created_message(resource: &str) -> String {
    format!("{resource} created successfully")
}

fn updated_message(resource: &str) -> String {
    format!("{resource} updated successfully")
}

/// Delete every listed record, or none of them
async fn delete_records<T: Searchable>(
    ctx: &Context<'_>,
    ids: &[ID],
) -> async_graphql::Result<DeletePayload> {
    let pool = ctx.data::<PgPool>()?;
    remove::<T>(pool, ids).await.extend()
}

async fn remove<T: Searchable>(pool: &PgPool, ids: &[ID]) -> ApiResult<DeletePayload> {
    let ids = parse_ids(T::RESOURCE, ids)?;
    let deleted_count = search::delete_many::<T>(pool, &ids).await?;
    Ok(DeletePayload {
        status: SUCCESS.to_string(),
        message: format!("{deleted_count} {} record(s) removed successfully", T::RESOURCE),
        deleted_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(created_message("Employee"), "Employee created successfully");
        assert_eq!(updated_message("Grade"), "Grade updated successfully");
    }
}
