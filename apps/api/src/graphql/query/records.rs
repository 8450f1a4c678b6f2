//! Record lookups and paginated list queries
//!
//! Each collection is served by the same two resolvers: [`get_record`] for a
//! single ID and [`list_page`] for `(page, search, limit)`.

use async_graphql::{Context, MaybeUndefined, Object, OutputType, ResultExt, ID};
use sqlx::PgPool;

use crate::error::{ApiError, ApiResult};
use crate::graphql::guards::AuthGuard;
use crate::graphql::pagination::{PageRequest, PageResult};
use crate::graphql::types::{Course, Department, Employee, Employer, Grade, Payroll, Title};
use crate::graphql::validation::parse_id;
use crate::models;
use crate::repositories::search::{self, Searchable};
use crate::repositories::utils::search_pattern;

/// Fetch one record by ID
async fn get_record<T, G>(ctx: &Context<'_>, id: &ID) -> async_graphql::Result<G>
where
    T: Searchable,
    G: From<T>,
{
    let pool = ctx.data::<PgPool>()?;
    fetch_record::<T>(pool, id).await.map(G::from).extend()
}

async fn fetch_record<T: Searchable>(pool: &PgPool, id: &ID) -> ApiResult<T> {
    let id = parse_id(T::RESOURCE, id)?;
    search::get_by_id::<T>(pool, id).await
}

/// One page of a collection, filtered by `search`, in most-recent-first order
async fn list_page<T, G>(
    ctx: &Context<'_>,
    page: Option<i32>,
    search: Option<String>,
    limit: MaybeUndefined<i32>,
) -> async_graphql::Result<PageResult<G>>
where
    T: Searchable,
    G: OutputType + From<T>,
{
    let pool = ctx.data::<PgPool>()?;
    let request = PageRequest::from_args(page, limit);
    fetch_page::<T>(pool, search.as_deref(), &request)
        .await
        .map(|(items, count)| {
            PageResult::from_window(items.into_iter().map(G::from).collect(), count, &request)
        })
        .extend()
}

async fn fetch_page<T: Searchable>(
    pool: &PgPool,
    search: Option<&str>,
    request: &PageRequest,
) -> ApiResult<(Vec<T>, i64)> {
    let pattern = search_pattern(search);
    let window = request.window();

    let (items, count) =
        search::page::<T>(pool, pattern.as_deref(), window.limit, window.offset)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, table = T::TABLE, "Failed to list records");
                ApiError::from(e)
            })?;

    tracing::debug!(
        table = T::TABLE,
        page = request.page,
        count,
        returned = items.len(),
        filtered = pattern.is_some(),
        "Listed records"
    );

    Ok((items, count))
}

/// Single-record and list queries for every collection
#[derive(Default)]
pub struct RecordQuery;

#[Object]
impl RecordQuery {
    #[graphql(guard = "AuthGuard")]
    async fn employee(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Employee> {
        get_record::<models::Employee, _>(ctx, &id).await
    }

    /// Employees matching `search` on name, contact details, dates, job title,
    /// employer, department, course or grade
    #[graphql(guard = "AuthGuard")]
    async fn employees(
        &self,
        ctx: &Context<'_>,
        page: Option<i32>,
        search: Option<String>,
        limit: MaybeUndefined<i32>,
    ) -> async_graphql::Result<PageResult<Employee>> {
        list_page::<models::Employee, _>(ctx, page, search, limit).await
    }

    #[graphql(guard = "AuthGuard")]
    async fn employer(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Employer> {
        get_record::<models::Employer, _>(ctx, &id).await
    }

    #[graphql(guard = "AuthGuard")]
    async fn employers(
        &self,
        ctx: &Context<'_>,
        page: Option<i32>,
        search: Option<String>,
        limit: MaybeUndefined<i32>,
    ) -> async_graphql::Result<PageResult<Employer>> {
        list_page::<models::Employer, _>(ctx, page, search, limit).await
    }

    #[graphql(guard = "AuthGuard")]
    async fn course(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Course> {
        get_record::<models::Course, _>(ctx, &id).await
    }

    #[graphql(guard = "AuthGuard")]
    async fn courses(
        &self,
        ctx: &Context<'_>,
        page: Option<i32>,
        search: Option<String>,
        limit: MaybeUndefined<i32>,
    ) -> async_graphql::Result<PageResult<Course>> {
        list_page::<models::Course, _>(ctx, page, search, limit).await
    }

    #[graphql(guard = "AuthGuard")]
    async fn department(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Department> {
        get_record::<models::Department, _>(ctx, &id).await
    }

    #[graphql(guard = "AuthGuard")]
    async fn departments(
        &self,
        ctx: &Context<'_>,
        page: Option<i32>,
        search: Option<String>,
        limit: MaybeUndefined<i32>,
    ) -> async_graphql::Result<PageResult<Department>> {
        list_page::<models::Department, _>(ctx, page, search, limit).await
    }

    #[graphql(guard = "AuthGuard")]
    async fn title(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Title> {
        get_record::<models::Title, _>(ctx, &id).await
    }

    #[graphql(guard = "AuthGuard")]
    async fn titles(
        &self,
        ctx: &Context<'_>,
        page: Option<i32>,
        search: Option<String>,
        limit: MaybeUndefined<i32>,
    ) -> async_graphql::Result<PageResult<Title>> {
        list_page::<models::Title, _>(ctx, page, search, limit).await
    }

    #[graphql(guard = "AuthGuard")]
    async fn grade(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Grade> {
        get_record::<models::Grade, _>(ctx, &id).await
    }

    #[graphql(guard = "AuthGuard")]
    async fn grades(
        &self,
        ctx: &Context<'_>,
        page: Option<i32>,
        search: Option<String>,
        limit: MaybeUndefined<i32>,
    ) -> async_graphql::Result<PageResult<Grade>> {
        list_page::<models::Grade, _>(ctx, page, search, limit).await
    }

    #[graphql(guard = "AuthGuard")]
    async fn payroll(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Payroll> {
        get_record::<models::Payroll, _>(ctx, &id).await
    }

    #[graphql(guard = "AuthGuard")]
    async fn payrolls(
        &self,
        ctx: &Context<'_>,
        page: Option<i32>,
        search: Option<String>,
        limit: MaybeUndefined<i32>,
    ) -> async_graphql::Result<PageResult<Payroll>> {
        list_page::<models::Payroll, _>(ctx, page, search, limit).await
    }
}
