//! Employer GraphQL type

use async_graphql::{Context, Object, ID};
use chrono::{DateTime, Utc};

use super::user::User;
use crate::models::{Employer as DbEmployer, User as DbUser};

pub struct Employer {
    inner: DbEmployer,
}

impl From<DbEmployer> for Employer {
    fn from(employer: DbEmployer) -> Self {
        Self { inner: employer }
    }
}

#[Object]
impl Employer {
    async fn id(&self) -> ID {
        ID(self.inner.id.to_string())
    }

    async fn business_name(&self) -> &str {
        &self.inner.business_name
    }

    async fn phone_numbers(&self) -> Option<&str> {
        self.inner.phone_numbers.as_deref()
    }

    async fn website_link(&self) -> Option<&str> {
        self.inner.website_link.as_deref()
    }

    async fn address(&self) -> Option<&str> {
        self.inner.address.as_deref()
    }

    async fn contact_name(&self) -> Option<&str> {
        self.inner.contact_name.as_deref()
    }

    async fn contact_phone_number(&self) -> Option<&str> {
        self.inner.contact_phone_number.as_deref()
    }

    async fn contact_role(&self) -> Option<&str> {
        self.inner.contact_role.as_deref()
    }

    /// User account representing the employer
    async fn employer_details(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<User>> {
        let user = super::related::<DbUser>(ctx, self.inner.user_id).await?;
        Ok(user.map(User::from))
    }

    async fn location(&self) -> Option<&str> {
        self.inner.location.as_deref()
    }

    async fn industry(&self) -> Option<&str> {
        self.inner.industry.as_deref()
    }

    async fn size(&self) -> Option<&str> {
        self.inner.size.as_deref()
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    async fn updated_at(&self) -> DateTime<Utc> {
        self.inner.updated_at
    }
}
