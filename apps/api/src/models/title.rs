//! Job title model

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Job title from the titles table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Title {
    pub id: Uuid,
    pub title_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
