//! Authentication service for Workforce
//!
//! Stateless bearer tokens: login checks an Argon2 password hash and issues a
//! signed JWT access token; every request verifies the token without touching
//! the database.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sqlx::PgPool;

use crate::error::{ApiError, ApiResult};
use crate::models::user::{Claims, User, TOKEN_ISSUER};
use crate::repositories::UserRepository;

/// Default access token lifetime (one day)
const DEFAULT_ACCESS_TTL_SECS: i64 = 24 * 3600;

/// Authentication service configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Access token TTL in seconds
    pub access_token_ttl_secs: i64,
    /// JWT issuer
    pub issuer: String,
    /// JWT audience
    pub audience: String,
}

impl AuthConfig {
    /// Create a new AuthConfig with the default TTL
    pub fn new(jwt_secret: String) -> Self {
        Self {
            jwt_secret,
            access_token_ttl_secs: DEFAULT_ACCESS_TTL_SECS,
            issuer: TOKEN_ISSUER.to_string(),
            audience: TOKEN_ISSUER.to_string(),
        }
    }

    /// Create AuthConfig from an expiry string (e.g. "15m", "1d")
    ///
    /// Unparseable strings fall back to the default TTL.
    pub fn with_expiry_string(jwt_secret: String, access_expiry: &str) -> Self {
        Self {
            access_token_ttl_secs: parse_duration_string(access_expiry)
                .unwrap_or(DEFAULT_ACCESS_TTL_SECS),
            ..Self::new(jwt_secret)
        }
    }
}

/// Parse duration strings like "15m", "7d", "24h" to seconds
fn parse_duration_string(s: &str) -> Option<i64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let (num_str, unit) = s.split_at(s.len() - 1);
    let num: i64 = num_str.parse().ok()?;

    match unit {
        "s" => Some(num),
        "m" => Some(num * 60),
        "h" => Some(num * 3600),
        "d" => Some(num * 24 * 3600),
        "w" => Some(num * 7 * 24 * 3600),
        _ => None,
    }
}

/// Signed access token handed to a client after login
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Authentication service providing login and token verification
#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
    config: AuthConfig,
    argon2: Argon2<'static>,
    /// Hash verified when the email is unknown, so both login failures take
    /// the same time
    dummy_password_hash: Option<String>,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(pool: PgPool, config: AuthConfig) -> Self {
        let argon2 = Argon2::default();

        let dummy_salt = SaltString::generate(&mut OsRng);
        let dummy_password_hash = argon2
            .hash_password(b"dummy_password_for_timing_attack_prevention", &dummy_salt)
            .map(|hash| hash.to_string())
            .map_err(|e| tracing::warn!(error = %e, "Failed to prepare dummy password hash"))
            .ok();

        Self {
            users: UserRepository::new(pool),
            config,
            argon2,
            dummy_password_hash,
        }
    }

    /// Authenticate with email and password
    ///
    /// # Errors
    /// - `ApiError::InvalidCredentials` if the email is unknown or the password is wrong
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<(User, AccessToken)> {
        let user = self.users.find_by_email(email).await?;

        let user = match user {
            Some(user) if self.verify_password(password, &user.password_hash)? => user,
            Some(_) => {
                tracing::warn!(email = %email, "Login failed: invalid password");
                return Err(ApiError::InvalidCredentials);
            }
            None => {
                if let Some(dummy) = &self.dummy_password_hash {
                    let _ = self.verify_password(password, dummy);
                }
                tracing::warn!(email = %email, "Login failed: user not found");
                return Err(ApiError::InvalidCredentials);
            }
        };

        let token = self.issue_access_token(&user)?;

        tracing::info!(user_id = %user.id, role = %user.role, "User logged in");

        Ok((user, token))
    }

    /// Sign an access token for a user
    pub fn issue_access_token(&self, user: &User) -> ApiResult<AccessToken> {
        let mut claims = Claims::new(user, self.config.access_token_ttl_secs);
        claims.iss = self.config.issuer.clone();
        claims.aud = self.config.audience.clone();

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )?;

        Ok(AccessToken {
            token,
            expires_at: Utc::now() + Duration::seconds(self.config.access_token_ttl_secs),
        })
    }

    /// Verify an access token and return its claims
    ///
    /// # Errors
    /// - `ApiError::InvalidToken` if token is invalid, expired, or malformed
    pub fn verify_access_token(&self, token: &str) -> ApiResult<Claims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_audience(&[&self.config.audience]);

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| {
            tracing::debug!(error = %e, "Access token verification failed");
            ApiError::InvalidToken(e.to_string())
        })?;

        Ok(token_data.claims)
    }

    /// Hash a password with Argon2id
    pub fn hash_password(&self, password: &str) -> ApiResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| ApiError::Internal(format!("Password hashing failed: {}", e)))?;
        Ok(hash.to_string())
    }

    /// Verify a password against an Argon2id hash
    fn verify_password(&self, password: &str, hash: &str) -> ApiResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| ApiError::Internal(format!("Invalid password hash format: {}", e)))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;
    use sqlx::postgres::PgPoolOptions;
    use uuid::Uuid;

    fn service(secret: &str) -> AuthService {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/workforce_unused")
            .unwrap();
        AuthService::new(pool, AuthConfig::new(secret.to_string()))
    }

    fn user(role: UserRole) -> User {
        User {
            id: Uuid::new_v4(),
            email: "hr@example.com".into(),
            username: "hr".into(),
            first_name: Some("Hana".into()),
            last_name: None,
            password_hash: String::new(),
            role,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_parse_duration_string() {
        assert_eq!(parse_duration_string("15m"), Some(900));
        assert_eq!(parse_duration_string("1d"), Some(86400));
        assert_eq!(parse_duration_string("24h"), Some(86400));
        assert_eq!(parse_duration_string("1w"), Some(604800));
        assert_eq!(parse_duration_string(""), None);
        assert_eq!(parse_duration_string("15x"), None);
    }

    #[test]
    fn test_auth_config_invalid_expiry_uses_default() {
        let config = AuthConfig::with_expiry_string("secret".to_string(), "soon");
        assert_eq!(config.access_token_ttl_secs, DEFAULT_ACCESS_TTL_SECS);
        assert_eq!(config.issuer, TOKEN_ISSUER);
    }

    #[tokio::test]
    async fn test_issued_token_verifies() {
        let auth = service("test-secret");
        let manager = user(UserRole::Manager);

        let token = auth.issue_access_token(&manager).unwrap();
        let claims = auth.verify_access_token(&token.token).unwrap();

        assert_eq!(claims.sub, manager.id);
        assert_eq!(claims.role, UserRole::Manager);
    }

    #[tokio::test]
    async fn test_token_signed_with_other_secret_is_rejected() {
        let token = service("secret-a")
            .issue_access_token(&user(UserRole::Admin))
            .unwrap();

        let err = service("secret-b")
            .verify_access_token(&token.token)
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_TOKEN");
    }

    #[tokio::test]
    async fn test_password_hash_round_trip() {
        let auth = service("test-secret");
        let hash = auth.hash_password("correct horse").unwrap();

        assert!(auth.verify_password("correct horse", &hash).unwrap());
        assert!(!auth.verify_password("battery staple", &hash).unwrap());
    }
}
