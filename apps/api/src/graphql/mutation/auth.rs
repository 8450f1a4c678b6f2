//! Authentication mutations

use async_graphql::{Context, InputObject, Object, ResultExt};

use crate::graphql::types::AuthPayload;
use crate::services::auth::AuthService;

/// Input for user login
#[derive(Debug, InputObject)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Default)]
pub struct AuthMutation;

#[Object]
impl AuthMutation {
    /// Exchange email and password for a bearer token
    ///
    /// # Errors
    /// - `INVALID_CREDENTIALS` for an unknown email or a wrong password
    async fn login(&self, ctx: &Context<'_>, input: LoginInput) -> async_graphql::Result<AuthPayload> {
        let auth_service = ctx.data::<AuthService>()?;

        let (user, token) = auth_service
            .login(input.email.trim(), &input.password)
            .await
            .extend()?;

        Ok(AuthPayload {
            access_token: token.token,
            expires_at: token.expires_at,
            user: user.into(),
        })
    }
}
