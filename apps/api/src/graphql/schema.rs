//! GraphQL schema builder

use async_graphql::{EmptySubscription, Schema};
use sqlx::PgPool;

use crate::error::{ApiError, ApiResult};
use crate::services::auth::AuthService;

use super::mutation::Mutation;
use super::query::Query;

/// The Workforce GraphQL schema type
pub type WorkforceSchema = Schema<Query, Mutation, EmptySubscription>;

/// Builder for constructing the GraphQL schema with required services
#[derive(Default)]
pub struct SchemaBuilder {
    pool: Option<PgPool>,
    auth_service: Option<AuthService>,
}

impl SchemaBuilder {
    /// Create a new schema builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the database pool
    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Set the auth service
    pub fn auth_service(mut self, auth_service: AuthService) -> Self {
        self.auth_service = Some(auth_service);
        self
    }

    /// Build the schema with all configured services
    ///
    /// Fails with a configuration error when the pool or the auth service
    /// has not been provided.
    pub fn build(self) -> ApiResult<WorkforceSchema> {
        let pool = self
            .pool
            .ok_or_else(|| ApiError::Configuration("database pool is required".into()))?;
        let auth_service = self
            .auth_service
            .ok_or_else(|| ApiError::Configuration("auth service is required".into()))?;

        Ok(build_schema(pool, auth_service))
    }
}

/// Create a new GraphQL schema with the provided services
pub fn build_schema(pool: PgPool, auth_service: AuthService) -> WorkforceSchema {
    Schema::build(Query::default(), Mutation::default(), EmptySubscription)
        .data(pool)
        .data(auth_service)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_builder_default() {
        let builder = SchemaBuilder::default();
        assert!(builder.pool.is_none());
        assert!(builder.auth_service.is_none());
    }

    #[test]
    fn test_schema_builder_requires_pool() {
        let err = SchemaBuilder::new().build().err().expect("build should fail");
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
        assert!(err.to_string().contains("database pool"));
    }

    #[test]
    fn test_sdl_exposes_page_types() {
        let sdl = Schema::build(Query::default(), Mutation::default(), EmptySubscription)
            .finish()
            .sdl();

        for name in [
            "type EmployeePage",
            "type PayrollPage",
            "hasNext: Boolean!",
            "hasPrev: Boolean!",
            "statusOptions",
            "deleteEmployees",
        ] {
            assert!(sdl.contains(name), "missing {name} in SDL");
        }
    }
}
