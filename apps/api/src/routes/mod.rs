//! HTTP route handlers for the Workforce API
//!
//! Everything except health checks is served through GraphQL.

pub mod health;

pub use health::{health_router, HealthState};
