//! Services for Workforce
//!
//! - Authentication: login and access token verification
//! - Health checks

pub mod auth;
pub mod health;

pub use auth::{AccessToken, AuthConfig, AuthService};
pub use health::HealthService;
