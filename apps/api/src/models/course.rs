//! Course model

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use super::choice::choice_table;

/// Qualification level matching PostgreSQL course_level type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, sqlx::Type)]
#[sqlx(type_name = "course_level")]
pub enum CourseLevel {
    #[sqlx(rename = "H")]
    HighSchool,
    #[default]
    #[sqlx(rename = "DE")]
    Degree,
    #[sqlx(rename = "DI")]
    Diploma,
    #[sqlx(rename = "M")]
    Masters,
    #[sqlx(rename = "DO")]
    Doctorate,
}

choice_table!(CourseLevel {
    HighSchool => ("H", "Form Four Certificate"),
    Degree => ("DE", "Degree"),
    Diploma => ("DI", "Diploma"),
    Masters => ("M", "Masters"),
    Doctorate => ("DO", "PHD"),
});

/// Completed course from the courses table; (name, level) is unique
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: Uuid,
    pub course_name: String,
    pub course_level: CourseLevel,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::choice::Choice;

    #[test]
    fn test_course_level_codes() {
        assert_eq!(CourseLevel::Doctorate.code(), "DO");
        assert_eq!(CourseLevel::from_code("di"), Some(CourseLevel::Diploma));
        assert_eq!(CourseLevel::from_code("XX"), None);
        assert_eq!(CourseLevel::ALL.len(), 5);
    }
}
