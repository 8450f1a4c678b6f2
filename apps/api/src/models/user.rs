//! User and authentication models
//!
//! Users are the operators of the admin system (not employees). Only the
//! fields needed for login, role checks and employer contact details live here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// JWT issuer and audience
pub const TOKEN_ISSUER: &str = "workforce";

/// User role enum matching PostgreSQL user_role type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manager,
    #[default]
    Staff,
}

impl UserRole {
    /// Roles allowed to create, update and delete records
    pub const EDITORS: &'static [UserRole] = &[UserRole::Admin, UserRole::Manager];
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Manager => write!(f, "manager"),
            Self::Staff => write!(f, "staff"),
        }
    }
}

/// User account from the users table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: Uuid,

    /// Email address (unique, stored lowercase)
    pub email: String,

    pub username: String,

    pub first_name: Option<String>,

    pub last_name: Option<String>,

    /// Argon2 hashed password
    #[serde(skip_serializing)]
    pub password_hash: String,

    pub role: UserRole,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: Uuid,

    pub email: String,

    pub role: UserRole,

    /// Issued at timestamp (Unix epoch)
    pub iat: i64,

    /// Expiration timestamp (Unix epoch)
    pub exp: i64,

    #[serde(default = "default_issuer")]
    pub iss: String,

    #[serde(default = "default_issuer")]
    pub aud: String,
}

fn default_issuer() -> String {
    TOKEN_ISSUER.to_string()
}

impl Claims {
    /// Create new claims for a user
    pub fn new(user: &User, access_token_ttl_secs: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: user.id,
            email: user.email.clone(),
            role: user.role,
            iat: now,
            exp: now + access_token_ttl_secs,
            iss: default_issuer(),
            aud: default_issuer(),
        }
    }

    /// Whether the caller holds one of the given roles
    pub fn has_any_role(&self, roles: &[UserRole]) -> bool {
        roles.contains(&self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: UserRole) -> User {
        User {
            id: Uuid::new_v4(),
            email: "ops@example.com".into(),
            username: "ops".into(),
            first_name: None,
            last_name: None,
            password_hash: String::new(),
            role,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_claims_expiry_window() {
        let claims = Claims::new(&user_with_role(UserRole::Staff), 60);
        assert_eq!(claims.exp - claims.iat, 60);
        assert_eq!(claims.iss, TOKEN_ISSUER);
    }

    #[test]
    fn test_editor_roles() {
        let manager = Claims::new(&user_with_role(UserRole::Manager), 60);
        let staff = Claims::new(&user_with_role(UserRole::Staff), 60);
        assert!(manager.has_any_role(UserRole::EDITORS));
        assert!(!staff.has_any_role(UserRole::EDITORS));
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&UserRole::Manager).unwrap();
        assert_eq!(json, "\"manager\"");
    }
}
