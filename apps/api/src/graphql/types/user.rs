//! User and authentication GraphQL types

use async_graphql::{Enum, Object, SimpleObject, ID};
use chrono::{DateTime, Utc};

use crate::models::user::{User as DbUser, UserRole as DbUserRole};

/// User role enum for GraphQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum UserRole {
    /// Full access
    Admin,
    /// Can create, update and delete records
    Manager,
    /// Read-only access
    Staff,
}

impl From<DbUserRole> for UserRole {
    fn from(role: DbUserRole) -> Self {
        match role {
            DbUserRole::Admin => Self::Admin,
            DbUserRole::Manager => Self::Manager,
            DbUserRole::Staff => Self::Staff,
        }
    }
}

/// System user account
pub struct User {
    inner: DbUser,
}

impl From<DbUser> for User {
    fn from(user: DbUser) -> Self {
        Self { inner: user }
    }
}

#[Object]
impl User {
    async fn id(&self) -> ID {
        ID(self.inner.id.to_string())
    }

    async fn email(&self) -> &str {
        &self.inner.email
    }

    async fn username(&self) -> &str {
        &self.inner.username
    }

    async fn first_name(&self) -> Option<&str> {
        self.inner.first_name.as_deref()
    }

    async fn last_name(&self) -> Option<&str> {
        self.inner.last_name.as_deref()
    }

    async fn role(&self) -> UserRole {
        self.inner.role.into()
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }
}

/// Result of a successful login
#[derive(SimpleObject)]
pub struct AuthPayload {
    /// Bearer token for the `Authorization` header
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
    pub user: User,
}
