//! Department mutations

use async_graphql::{Context, InputObject, Object, ResultExt, ID};
use sqlx::PgPool;

use super::{created_message, delete_records, updated_message};
use crate::error::{ApiError, ApiResult};
use crate::graphql::guards::RoleGuard;
use crate::graphql::types::{DeletePayload, DepartmentPayload, SUCCESS};
use crate::graphql::validation::{non_blank, parse_id, reference, required_text};
use crate::models::{Department, Grade};
use crate::repositories::DepartmentRepository;

#[derive(Debug, Default, InputObject)]
pub struct DepartmentInput {
    pub department_name: Option<String>,
    /// Grade ID
    pub pay_grade: Option<ID>,
    /// Names of sub-departments to add
    pub sub_departments: Option<Vec<String>>,
}

/// Trimmed, non-blank sub-department names
fn sub_department_names(names: Option<Vec<String>>) -> ApiResult<Vec<String>> {
    names
        .unwrap_or_default()
        .into_iter()
        .map(|name| required_text("sub_departments", Some(name)))
        .collect()
}

#[derive(Default)]
pub struct DepartmentMutation;

#[Object]
impl DepartmentMutation {
    #[graphql(guard = "RoleGuard::editors()")]
    async fn create_department(
        &self,
        ctx: &Context<'_>,
        input: DepartmentInput,
    ) -> async_graphql::Result<DepartmentPayload> {
        let pool = ctx.data::<PgPool>()?;
        create(pool, input).await.extend()
    }

    /// Update a department; listed sub-departments are added to the existing ones
    #[graphql(guard = "RoleGuard::editors()")]
    async fn update_department(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: DepartmentInput,
    ) -> async_graphql::Result<DepartmentPayload> {
        let pool = ctx.data::<PgPool>()?;
        update(pool, &id, input).await.extend()
    }

    #[graphql(guard = "RoleGuard::editors()")]
    async fn delete_departments(
        &self,
        ctx: &Context<'_>,
        ids: Vec<ID>,
    ) -> async_graphql::Result<DeletePayload> {
        delete_records::<Department>(ctx, &ids).await
    }
}

async fn create(pool: &PgPool, input: DepartmentInput) -> ApiResult<DepartmentPayload> {
    let department_name = required_text("department_name", input.department_name)?;
    let pay_grade_id = reference::<Grade>(pool, input.pay_grade.as_ref()).await?;
    let sub_departments = sub_department_names(input.sub_departments)?;

    let department = DepartmentRepository::new(pool.clone())
        .create(&department_name, pay_grade_id, &sub_departments)
        .await?;

    tracing::info!(department_id = %department.id, "Department created");

    Ok(DepartmentPayload {
        status: SUCCESS.to_string(),
        message: created_message("Department"),
        department: department.into(),
    })
}

async fn update(pool: &PgPool, id: &ID, input: DepartmentInput) -> ApiResult<DepartmentPayload> {
    let id = parse_id("Department", id)?;
    let department_name = non_blank("department_name", input.department_name)?;
    let pay_grade_id = reference::<Grade>(pool, input.pay_grade.as_ref()).await?;
    let sub_departments = sub_department_names(input.sub_departments)?;

    let department = DepartmentRepository::new(pool.clone())
        .update(id, department_name.as_deref(), pay_grade_id, &sub_departments)
        .await?
        .ok_or_else(|| ApiError::not_found("Department", id.to_string()))?;

    Ok(DepartmentPayload {
        status: SUCCESS.to_string(),
        message: updated_message("Department"),
        department: department.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_department_names_are_trimmed() {
        let names = sub_department_names(Some(vec![" Payroll ".into(), "Audit".into()])).unwrap();
        assert_eq!(names, vec!["Payroll", "Audit"]);
        assert!(sub_department_names(None).unwrap().is_empty());
    }

    #[test]
    fn test_blank_sub_department_is_rejected() {
        let err = sub_department_names(Some(vec!["".into()])).unwrap_err();
        assert_eq!(err.error_code(), "EMPTY_FIELD");
    }
}
