//! Job title GraphQL type

use async_graphql::{Object, ID};
use chrono::{DateTime, Utc};

use crate::models::Title as DbTitle;

pub struct Title {
    inner: DbTitle,
}

impl From<DbTitle> for Title {
    fn from(title: DbTitle) -> Self {
        Self { inner: title }
    }
}

#[Object]
impl Title {
    async fn id(&self) -> ID {
        ID(self.inner.id.to_string())
    }

    async fn title_name(&self) -> &str {
        &self.inner.title_name
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    async fn updated_at(&self) -> DateTime<Utc> {
        self.inner.updated_at
    }
}
