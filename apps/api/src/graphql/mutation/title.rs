//! Job title mutations

use async_graphql::{Context, InputObject, Object, ResultExt, ID};
use sqlx::PgPool;

use super::{created_message, delete_records, updated_message};
use crate::error::{ApiError, ApiResult};
use crate::graphql::guards::RoleGuard;
use crate::graphql::types::{DeletePayload, TitlePayload, SUCCESS};
use crate::graphql::validation::{non_blank, parse_id, required_text};
use crate::models::Title;
use crate::repositories::TitleRepository;

#[derive(Debug, Default, InputObject)]
pub struct TitleInput {
    pub title_name: Option<String>,
}

#[derive(Default)]
pub struct TitleMutation;

#[Object]
impl TitleMutation {
    #[graphql(guard = "RoleGuard::editors()")]
    async fn create_title(
        &self,
        ctx: &Context<'_>,
        input: TitleInput,
    ) -> async_graphql::Result<TitlePayload> {
        let pool = ctx.data::<PgPool>()?;
        create(pool, input).await.extend()
    }

    #[graphql(guard = "RoleGuard::editors()")]
    async fn update_title(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: TitleInput,
    ) -> async_graphql::Result<TitlePayload> {
        let pool = ctx.data::<PgPool>()?;
        update(pool, &id, input).await.extend()
    }

    #[graphql(guard = "RoleGuard::editors()")]
    async fn delete_titles(
        &self,
        ctx: &Context<'_>,
        ids: Vec<ID>,
    ) -> async_graphql::Result<DeletePayload> {
        delete_records::<Title>(ctx, &ids).await
    }
}

async fn create(pool: &PgPool, input: TitleInput) -> ApiResult<TitlePayload> {
    let title_name = required_text("title_name", input.title_name)?;
    let title = TitleRepository::new(pool.clone()).create(&title_name).await?;

    tracing::info!(title_id = %title.id, "Title created");

    Ok(TitlePayload {
        status: SUCCESS.to_string(),
        message: created_message("Title"),
        title: title.into(),
    })
}

async fn update(pool: &PgPool, id: &ID, input: TitleInput) -> ApiResult<TitlePayload> {
    let id = parse_id("Title", id)?;
    let title_name = non_blank("title_name", input.title_name)?;

    let title = TitleRepository::new(pool.clone())
        .update(id, title_name.as_deref())
        .await?
        .ok_or_else(|| ApiError::not_found("Title", id.to_string()))?;

    Ok(TitlePayload {
        status: SUCCESS.to_string(),
        message: updated_message("Title"),
        title: title.into(),
    })
}
