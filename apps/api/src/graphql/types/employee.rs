//! Employee GraphQL type

use async_graphql::{Context, Object, ResultExt, ID};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use super::choices::{EmployeeStatus, Gender, PayPeriod};
use super::course::Course;
use super::department::Department;
use super::employer::Employer;
use super::grade::Grade;
use super::title::Title;
use crate::error::ApiError;
use crate::models::{
    Course as DbCourse, Employee as DbEmployee, Employer as DbEmployer, Grade as DbGrade,
    Title as DbTitle,
};
use crate::repositories::DepartmentRepository;

/// Employee record exposed via GraphQL
pub struct Employee {
    inner: DbEmployee,
}

impl From<DbEmployee> for Employee {
    fn from(employee: DbEmployee) -> Self {
        Self { inner: employee }
    }
}

#[Object]
impl Employee {
    async fn id(&self) -> ID {
        ID(self.inner.id.to_string())
    }

    async fn status(&self) -> EmployeeStatus {
        self.inner.status.into()
    }

    async fn gender(&self) -> Gender {
        self.inner.gender.into()
    }

    async fn first_name(&self) -> &str {
        &self.inner.first_name
    }

    async fn last_name(&self) -> &str {
        &self.inner.last_name
    }

    async fn other_names(&self) -> Option<&str> {
        self.inner.other_names.as_deref()
    }

    /// "First Last"
    async fn full_name(&self) -> String {
        self.inner.full_name()
    }

    async fn email(&self) -> &str {
        &self.inner.email
    }

    async fn address(&self) -> Option<&str> {
        self.inner.address.as_deref()
    }

    async fn phone_numbers(&self) -> Option<&str> {
        self.inner.phone_numbers.as_deref()
    }

    async fn emergency_numbers(&self) -> Option<&str> {
        self.inner.emergency_numbers.as_deref()
    }

    async fn date_of_birth(&self) -> NaiveDate {
        self.inner.date_of_birth
    }

    async fn job_title(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Title>> {
        let title = super::related::<DbTitle>(ctx, self.inner.job_title_id).await?;
        Ok(title.map(Title::from))
    }

    async fn employer(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Employer>> {
        let employer = super::related::<DbEmployer>(ctx, self.inner.employer_id).await?;
        Ok(employer.map(Employer::from))
    }

    async fn departments(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Department>> {
        let pool = ctx.data::<PgPool>()?;
        let departments = DepartmentRepository::new(pool.clone())
            .find_by_employee(self.inner.id)
            .await
            .map_err(ApiError::from)
            .extend()?;
        Ok(departments.into_iter().map(Department::from).collect())
    }

    async fn hiring_date(&self) -> NaiveDate {
        self.inner.hiring_date
    }

    async fn current_salary(&self) -> f64 {
        self.inner.current_salary
    }

    async fn starting_salary(&self) -> f64 {
        self.inner.starting_salary
    }

    async fn qualifications(&self) -> Option<&str> {
        self.inner.qualifications.as_deref()
    }

    async fn completed_course(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Course>> {
        let course = super::related::<DbCourse>(ctx, self.inner.completed_course_id).await?;
        Ok(course.map(Course::from))
    }

    async fn rate_hour(&self) -> Option<f64> {
        self.inner.rate_hour
    }

    async fn period(&self) -> PayPeriod {
        self.inner.period.into()
    }

    /// Pay per `period`
    async fn per_period(&self) -> Option<f64> {
        self.inner.per_period
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
