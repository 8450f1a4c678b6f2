//! Grade GraphQL type

use async_graphql::{Object, ID};
use chrono::{DateTime, Utc};

use crate::models::Grade as DbGrade;

/// Pay grade
pub struct Grade {
    inner: DbGrade,
}

impl From<DbGrade> for Grade {
    fn from(grade: DbGrade) -> Self {
        Self { inner: grade }
    }
}

#[Object]
impl Grade {
    async fn id(&self) -> ID {
        ID(self.inner.id.to_string())
    }

    async fn grade_name(&self) -> &str {
        &self.inner.grade_name
    }

    /// Basic pay
    async fn grade_basic(&self) -> &str {
        &self.inner.grade_basic
    }

    /// Dearness allowance
    async fn grade_da(&self) -> &str {
        &self.inner.grade_da
    }

    /// Travel allowance
    async fn grade_ta(&self) -> &str {
        &self.inner.grade_ta
    }

    async fn grade_bonus(&self) -> f64 {
        self.inner.grade_bonus
    }

    /// Provident fund contribution
    async fn grade_pf(&self) -> &str {
        &self.inner.grade_pf
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    async fn updated_at(&self) -> DateTime<Utc> {
        self.inner.updated_at
    }
}
