//! Payroll GraphQL type

use async_graphql::{Context, Object, ID};
use chrono::{DateTime, NaiveDate, Utc};

use super::employee::Employee;
use super::grade::Grade;
use crate::models::{Employee as DbEmployee, Grade as DbGrade, Payroll as DbPayroll};

/// Salary payment for one employee and period
pub struct Payroll {
    inner: DbPayroll,
}

impl From<DbPayroll> for Payroll {
    fn from(payroll: DbPayroll) -> Self {
        Self { inner: payroll }
    }
}

#[Object]
impl Payroll {
    async fn id(&self) -> ID {
        ID(self.inner.id.to_string())
    }

    async fn period_number(&self) -> i32 {
        self.inner.period_number
    }

    async fn employee_net_salary(&self) -> f64 {
        self.inner.employee_net_salary
    }

    async fn employee_gross_salary(&self) -> f64 {
        self.inner.employee_gross_salary
    }

    async fn reimbursment_date(&self) -> NaiveDate {
        self.inner.reimbursment_date
    }

    async fn employee(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Employee>> {
        let employee = super::related::<DbEmployee>(ctx, self.inner.employee_id).await?;
        Ok(employee.map(Employee::from))
    }

    async fn grade(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Grade>> {
        let grade = super::related::<DbGrade>(ctx, self.inner.grade_id).await?;
        Ok(grade.map(Grade::from))
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    async fn updated_at(&self) -> DateTime<Utc> {
        self.inner.updated_at
    }
}
