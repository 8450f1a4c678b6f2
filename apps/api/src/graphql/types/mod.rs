//! GraphQL type definitions for Workforce
//!
//! Record types wrap their database model and resolve relations on demand.

mod choices;
mod course;
mod department;
mod employee;
mod employer;
mod grade;
mod payload;
mod payroll;
mod title;
mod user;

pub use choices::{
    choice_options, ChoiceOption, CourseLevel, EmployeeStatus, Gender, PayPeriod,
};
pub use course::Course;
pub use department::{Department, SubDepartment};
pub use employee::Employee;
pub use employer::Employer;
pub use grade::Grade;
pub use payload::{
    CoursePayload, DeletePayload, DepartmentPayload, EmployeePayload, EmployerPayload,
    GradePayload, PayrollPayload, TitlePayload, SUCCESS,
};
pub use payroll::Payroll;
pub use title::Title;
pub use user::{AuthPayload, User, UserRole};

use async_graphql::{Context, ResultExt};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::repositories::search::{self, Searchable};

/// Load the record behind a nullable foreign key
async fn related<T: Searchable>(
    ctx: &Context<'_>,
    id: Option<Uuid>,
) -> async_graphql::Result<Option<T>> {
    let Some(id) = id else {
        return Ok(None);
    };
    let pool = ctx.data::<PgPool>()?;
    search::find_by_id::<T>(pool, id)
        .await
        .map_err(ApiError::from)
        .extend()
}
