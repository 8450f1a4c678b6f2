//! Course GraphQL type

use async_graphql::{Object, ID};
use chrono::{DateTime, Utc};

use super::choices::CourseLevel;
use crate::models::Course as DbCourse;

/// A completed course; name and level together are unique
pub struct Course {
    inner: DbCourse,
}

impl From<DbCourse> for Course {
    fn from(course: DbCourse) -> Self {
        Self { inner: course }
    }
}

#[Object]
impl Course {
    async fn id(&self) -> ID {
        ID(self.inner.id.to_string())
    }

    async fn course_name(&self) -> &str {
        &self.inner.course_name
    }

    async fn course_level(&self) -> CourseLevel {
        self.inner.course_level.into()
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    async fn updated_at(&self) -> DateTime<Utc> {
        self.inner.updated_at
    }
}
