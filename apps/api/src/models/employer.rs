//! Employer model

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Employer from the employers table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employer {
    pub id: Uuid,
    pub business_name: String,
    pub phone_numbers: Option<String>,
    pub website_link: Option<String>,
    pub address: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone_number: Option<String>,
    pub contact_role: Option<String>,
    /// User account representing the employer
    pub user_id: Option<Uuid>,
    pub location: Option<String>,
    pub industry: Option<String>,
    pub size: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
