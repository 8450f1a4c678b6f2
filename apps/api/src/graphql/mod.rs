//! GraphQL schema and resolvers
//!
//! This module contains the async-graphql schema including:
//! - Query resolvers for records, choice options and the current user
//! - Mutation resolvers for login and record create/update/delete
//! - Pagination and search helpers shared by every list query
//! - Guards for authentication and role checks

pub mod guards;
pub mod mutation;
pub mod pagination;
pub mod query;
pub mod schema;
pub mod types;
pub mod validation;

pub use schema::{build_schema, SchemaBuilder, WorkforceSchema};
