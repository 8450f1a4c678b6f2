//! GraphQL guards for the Workforce API
//!
//! The HTTP handler verifies the bearer token and puts the resulting
//! [`Claims`] into the request data. Guards only look at those claims:
//! [`AuthGuard`] requires a caller, [`RoleGuard`] requires one of a set of
//! roles. Failures carry the `UNAUTHENTICATED` / `FORBIDDEN` error codes.

use async_graphql::{Context, ErrorExtensions, Guard};

use crate::error::ApiError;
use crate::models::user::{Claims, UserRole};

/// Claims of the authenticated caller, or `UNAUTHENTICATED`
pub fn require_claims<'a>(ctx: &'a Context<'_>) -> async_graphql::Result<&'a Claims> {
    ctx.data_opt::<Claims>()
        .ok_or_else(|| ApiError::Unauthorized.extend())
}

/// Requires an authenticated caller
#[derive(Debug, Default, Clone, Copy)]
pub struct AuthGuard;

impl Guard for AuthGuard {
    async fn check(&self, ctx: &Context<'_>) -> async_graphql::Result<()> {
        require_claims(ctx).map(|_| ())
    }
}

/// Requires an authenticated caller holding one of the given roles
#[derive(Debug, Clone, Copy)]
pub struct RoleGuard {
    roles: &'static [UserRole],
}

impl RoleGuard {
    pub fn new(roles: &'static [UserRole]) -> Self {
        Self { roles }
    }

    /// Admins and managers
    pub fn editors() -> Self {
        Self::new(UserRole::EDITORS)
    }
}

impl Guard for RoleGuard {
    async fn check(&self, ctx: &Context<'_>) -> async_graphql::Result<()> {
        let claims = require_claims(ctx)?;
        if claims.has_any_role(self.roles) {
            return Ok(());
        }

        let allowed = self
            .roles
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" or ");
        tracing::debug!(user_id = %claims.sub, role = %claims.role, "Role check failed");
        Err(ApiError::Forbidden(format!("{allowed} role required")).extend())
    }
}
