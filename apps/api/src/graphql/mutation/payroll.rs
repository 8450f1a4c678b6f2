//! Payroll mutations

use async_graphql::{Context, InputObject, Object, ResultExt, ID};
use chrono::NaiveDate;
use sqlx::PgPool;

use super::{created_message, delete_records, updated_message};
use crate::error::{ApiError, ApiResult};
use crate::graphql::guards::RoleGuard;
use crate::graphql::types::{DeletePayload, PayrollPayload, SUCCESS};
use crate::graphql::validation::{parse_id, reference, required};
use crate::models::{Employee, Grade, Payroll};
use crate::repositories::{NewPayroll, PayrollChanges, PayrollRepository};

/// Payroll fields; the period, salaries and date are required on create
#[derive(Debug, Default, InputObject)]
pub struct PayrollInput {
    pub period_number: Option<i32>,
    pub employee_net_salary: Option<f64>,
    pub employee_gross_salary: Option<f64>,
    pub reimbursment_date: Option<NaiveDate>,
    /// Employee ID
    pub employee: Option<ID>,
    /// Grade ID
    pub grade: Option<ID>,
}

#[derive(Default)]
pub struct PayrollMutation;

#[Object]
impl PayrollMutation {
    #[graphql(guard = "RoleGuard::editors()")]
    async fn create_payroll(
        &self,
        ctx: &Context<'_>,
        input: PayrollInput,
    ) -> async_graphql::Result<PayrollPayload> {
        let pool = ctx.data::<PgPool>()?;
        create(pool, input).await.extend()
    }

    #[graphql(guard = "RoleGuard::editors()")]
    async fn update_payroll(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: PayrollInput,
    ) -> async_graphql::Result<PayrollPayload> {
        let pool = ctx.data::<PgPool>()?;
        update(pool, &id, input).await.extend()
    }

    #[graphql(guard = "RoleGuard::editors()")]
    async fn delete_payrolls(
        &self,
        ctx: &Context<'_>,
        ids: Vec<ID>,
    ) -> async_graphql::Result<DeletePayload> {
        delete_records::<Payroll>(ctx, &ids).await
    }
}

async fn create(pool: &PgPool, input: PayrollInput) -> ApiResult<PayrollPayload> {
    let new = NewPayroll {
        period_number: required("period_number", input.period_number)?,
        employee_net_salary: required("employee_net_salary", input.employee_net_salary)?,
        employee_gross_salary: required("employee_gross_salary", input.employee_gross_salary)?,
        reimbursment_date: required("reimbursment_date", input.reimbursment_date)?,
        employee_id: reference::<Employee>(pool, input.employee.as_ref()).await?,
        grade_id: reference::<Grade>(pool, input.grade.as_ref()).await?,
    };

    let payroll = PayrollRepository::new(pool.clone()).create(&new).await?;

    tracing::info!(payroll_id = %payroll.id, period = payroll.period_number, "Payroll created");

    Ok(PayrollPayload {
        status: SUCCESS.to_string(),
        message: created_message("Payroll"),
        payroll: payroll.into(),
    })
}

async fn update(pool: &PgPool, id: &ID, input: PayrollInput) -> ApiResult<PayrollPayload> {
    let id = parse_id("Payroll", id)?;
    let changes = PayrollChanges {
        period_number: input.period_number,
        employee_net_salary: input.employee_net_salary,
        employee_gross_salary: input.employee_gross_salary,
        reimbursment_date: input.reimbursment_date,
        employee_id: reference::<Employee>(pool, input.employee.as_ref()).await?,
        grade_id: reference::<Grade>(pool, input.grade.as_ref()).await?,
    };

    let payroll = PayrollRepository::new(pool.clone())
        .update(id, &changes)
        .await?
        .ok_or_else(|| ApiError::not_found("Payroll", id.to_string()))?;

    Ok(PayrollPayload {
        status: SUCCESS.to_string(),
        message: updated_message("Payroll"),
        payroll: payroll.into(),
    })
}
