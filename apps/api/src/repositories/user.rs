//! User repository
//!
//! Users are the operators of the admin system. The API only reads them
//! (login, `me`, employer contact details); accounts are provisioned with
//! [`UserRepository::create`].

use sqlx::PgPool;
use uuid::Uuid;

use super::search::{SearchField, Searchable};
use super::utils::USER_COLUMNS;
use crate::models::user::{User, UserRole};

impl Searchable for User {
    const TABLE: &'static str = "users";
    const RESOURCE: &'static str = "User";
    const COLUMNS: &'static str = USER_COLUMNS;
    const SEARCH_FIELDS: &'static [SearchField] = &[
        SearchField::Column("email"),
        SearchField::Column("username"),
        SearchField::Column("first_name"),
        SearchField::Column("last_name"),
    ];
}

/// Repository for user database operations
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new UserRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by their unique ID
    ///
    /// # Returns
    /// * `Ok(Some(User))` - If the user exists
    /// * `Ok(None)` - If no user with the given ID exists
    pub async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, sqlx::Error> {
        super::search::find_by_id::<User>(&self.pool, user_id).await
    }

    /// Find a user by their email address (case-insensitive)
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE LOWER(email) = LOWER($1)");
        sqlx::query_as::<_, User>(&sql)
            .bind(email.trim())
            .fetch_optional(&self.pool)
            .await
    }

    /// Create a user with an already hashed password
    pub async fn create(
        &self,
        email: &str,
        username: &str,
        password_hash: &str,
        role: UserRole,
    ) -> Result<User, sqlx::Error> {
        let sql = format!(
            r#"
            INSERT INTO users (email, username, password_hash, role)
            VALUES (LOWER($1), $2, $3, $4)
            RETURNING {USER_COLUMNS}
            "#
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(email.trim())
            .bind(username)
            .bind(password_hash)
            .bind(role)
            .fetch_one(&self.pool)
            .await
    }
}
