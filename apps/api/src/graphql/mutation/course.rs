//! Course mutations

use async_graphql::{Context, InputObject, Object, ResultExt, ID};
use sqlx::PgPool;

use super::{created_message, delete_records, updated_message};
use crate::error::{ApiError, ApiResult};
use crate::graphql::guards::RoleGuard;
use crate::graphql::types::{CourseLevel, CoursePayload, DeletePayload, SUCCESS};
use crate::graphql::validation::{non_blank, parse_id, required, required_text};
use crate::models::Course;
use crate::repositories::CourseRepository;

/// Course fields; a name and level pair must be unique
#[derive(Debug, Default, InputObject)]
pub struct CourseInput {
    pub course_name: Option<String>,
    pub course_level: Option<CourseLevel>,
}

#[derive(Default)]
pub struct CourseMutation;

#[Object]
impl CourseMutation {
    #[graphql(guard = "RoleGuard::editors()")]
    async fn create_course(
        &self,
        ctx: &Context<'_>,
        input: CourseInput,
    ) -> async_graphql::Result<CoursePayload> {
        let pool = ctx.data::<PgPool>()?;
        create(pool, input).await.extend()
    }

    #[graphql(guard = "RoleGuard::editors()")]
    async fn update_course(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: CourseInput,
    ) -> async_graphql::Result<CoursePayload> {
        let pool = ctx.data::<PgPool>()?;
        update(pool, &id, input).await.extend()
    }

    #[graphql(guard = "RoleGuard::editors()")]
    async fn delete_courses(
        &self,
        ctx: &Context<'_>,
        ids: Vec<ID>,
    ) -> async_graphql::Result<DeletePayload> {
        delete_records::<Course>(ctx, &ids).await
    }
}

async fn create(pool: &PgPool, input: CourseInput) -> ApiResult<CoursePayload> {
    let course_name = required_text("course_name", input.course_name)?;
    let course_level = required("course_level", input.course_level)?;

    let course = CourseRepository::new(pool.clone())
        .create(&course_name, course_level.into())
        .await?;

    tracing::info!(course_id = %course.id, "Course created");

    Ok(CoursePayload {
        status: SUCCESS.to_string(),
        message: created_message("Course"),
        course: course.into(),
    })
}

async fn update(pool: &PgPool, id: &ID, input: CourseInput) -> ApiResult<CoursePayload> {
    let id = parse_id("Course", id)?;
    let course_name = non_blank("course_name", input.course_name)?;

    let course = CourseRepository::new(pool.clone())
        .update(id, course_name.as_deref(), input.course_level.map(Into::into))
        .await?
        .ok_or_else(|| ApiError::not_found("Course", id.to_string()))?;

    Ok(CoursePayload {
        status: SUCCESS.to_string(),
        message: updated_message("Course"),
        course: course.into(),
    })
}
