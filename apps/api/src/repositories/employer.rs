//! Employer repository

use sqlx::PgPool;
use uuid::Uuid;

use super::search::{SearchField, Searchable};
use super::utils::EMPLOYER_COLUMNS;
use crate::models::Employer;

impl Searchable for Employer {
    const TABLE: &'static str = "employers";
    const RESOURCE: &'static str = "Employer";
    const COLUMNS: &'static str = EMPLOYER_COLUMNS;
    const SEARCH_FIELDS: &'static [SearchField] = &[
        SearchField::Column("business_name"),
        SearchField::Column("website_link"),
        SearchField::Column("contact_phone_number"),
        SearchField::Column("contact_name"),
        SearchField::Column("contact_role"),
        SearchField::Column("address"),
        SearchField::Column("phone_numbers"),
        SearchField::Column("location"),
        SearchField::Column("industry"),
        SearchField::Column("size"),
        SearchField::Related {
            from: "users u",
            on: "u.id = t.user_id",
            columns: &["u.username", "u.first_name", "u.last_name"],
        },
    ];
}

/// Employer column values, shared by create and update.
///
/// On create `None` stores NULL; on update `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct EmployerFields {
    pub business_name: Option<String>,
    pub phone_numbers: Option<String>,
    pub website_link: Option<String>,
    pub address: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone_number: Option<String>,
    pub contact_role: Option<String>,
    pub user_id: Option<Uuid>,
    pub location: Option<String>,
    pub industry: Option<String>,
    pub size: Option<String>,
}

/// Repository for employer database operations
#[derive(Clone)]
pub struct EmployerRepository {
    pool: PgPool,
}

impl EmployerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert an employer; `business_name` is required
    pub async fn create(
        &self,
        business_name: &str,
        fields: &EmployerFields,
    ) -> Result<Employer, sqlx::Error> {
        let sql = format!(
            r#"
            INSERT INTO employers (
                business_name, phone_numbers, website_link, address,
                contact_name, contact_phone_number, contact_role, user_id,
                location, industry, size
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {EMPLOYER_COLUMNS}
            "#
        );
        sqlx::query_as::<_, Employer>(&sql)
            .bind(business_name)
            .bind(&fields.phone_numbers)
            .bind(&fields.website_link)
            .bind(&fields.address)
            .bind(&fields.contact_name)
            .bind(&fields.contact_phone_number)
            .bind(&fields.contact_role)
            .bind(fields.user_id)
            .bind(&fields.location)
            .bind(&fields.industry)
            .bind(&fields.size)
            .fetch_one(&self.pool)
            .await
    }

    /// Apply a partial update; `Ok(None)` when the employer does not exist
    pub async fn update(
        &self,
        id: Uuid,
        fields: &EmployerFields,
    ) -> Result<Option<Employer>, sqlx::Error> {
        let sql = format!(
            r#"
            UPDATE employers SET
                business_name = COALESCE($2, business_name),
                phone_numbers = COALESCE($3, phone_numbers),
                website_link = COALESCE($4, website_link),
                address = COALESCE($5, address),
                contact_name = COALESCE($6, contact_name),
                contact_phone_number = COALESCE($7, contact_phone_number),
                contact_role = COALESCE($8, contact_role),
                user_id = COALESCE($9, user_id),
                location = COALESCE($10, location),
                industry = COALESCE($11, industry),
                size = COALESCE($12, size),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {EMPLOYER_COLUMNS}
            "#
        );
        sqlx::query_as::<_, Employer>(&sql)
            .bind(id)
            .bind(&fields.business_name)
            .bind(&fields.phone_numbers)
            .bind(&fields.website_link)
            .bind(&fields.address)
            .bind(&fields.contact_name)
            .bind(&fields.contact_phone_number)
            .bind(&fields.contact_role)
            .bind(fields.user_id)
            .bind(&fields.location)
            .bind(&fields.industry)
            .bind(&fields.size)
            .fetch_optional(&self.pool)
            .await
    }
}
