//! Department GraphQL types

use async_graphql::{Context, Object, ResultExt, SimpleObject, ID};
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::grade::Grade;
use crate::error::ApiError;
use crate::models::{
    Department as DbDepartment, Grade as DbGrade, SubDepartment as DbSubDepartment,
};
use crate::repositories::DepartmentRepository;

/// Named unit inside a department
#[derive(Debug, Clone, SimpleObject)]
pub struct SubDepartment {
    pub id: ID,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbSubDepartment> for SubDepartment {
    fn from(sub: DbSubDepartment) -> Self {
        Self {
            id: ID(sub.id.to_string()),
            name: sub.name,
            created_at: sub.created_at,
        }
    }
}

pub struct Department {
    inner: DbDepartment,
}

impl From<DbDepartment> for Department {
    fn from(department: DbDepartment) -> Self {
        Self { inner: department }
    }
}

#[Object]
impl Department {
    async fn id(&self) -> ID {
        ID(self.inner.id.to_string())
    }

    async fn department_name(&self) -> &str {
        &self.inner.department_name
    }

    /// Default grade for members of this department
    async fn pay_grade(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Grade>> {
        let grade = super::related::<DbGrade>(ctx, self.inner.pay_grade_id).await?;
        Ok(grade.map(Grade::from))
    }

    async fn sub_departments(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<SubDepartment>> {
        let pool = ctx.data::<PgPool>()?;
        let subs = DepartmentRepository::new(pool.clone())
            .sub_departments(self.inner.id)
            .await
            .map_err(ApiError::from)
            .extend()?;
        Ok(subs.into_iter().map(SubDepartment::from).collect())
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    async fn updated_at(&self) -> DateTime<Utc> {
        self.inner.updated_at
    }
}
