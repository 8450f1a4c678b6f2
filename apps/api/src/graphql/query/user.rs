//! Current user query

use async_graphql::{Context, Object, ResultExt};
use sqlx::PgPool;

use crate::error::ApiError;
use crate::graphql::guards::{require_claims, AuthGuard};
use crate::graphql::types::User;
use crate::repositories::UserRepository;

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    /// The authenticated user
    #[graphql(guard = "AuthGuard")]
    async fn me(&self, ctx: &Context<'_>) -> async_graphql::Result<User> {
        let claims = require_claims(ctx)?;
        let pool = ctx.data::<PgPool>()?;

        UserRepository::new(pool.clone())
            .find_by_id(claims.sub)
            .await
            .map_err(ApiError::from)
            .and_then(|user| user.ok_or_else(|| ApiError::not_found("User", claims.sub.to_string())))
            .map(User::from)
            .extend()
    }
}
