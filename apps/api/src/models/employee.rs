//! Employee model
//!
//! Departments are a many-to-many relation stored in `employee_departments`
//! and are loaded separately.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use super::choice::choice_table;

/// Employment status matching PostgreSQL employee_status type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, sqlx::Type)]
#[sqlx(type_name = "employee_status")]
pub enum EmployeeStatus {
    #[default]
    #[sqlx(rename = "F")]
    FullTime,
    #[sqlx(rename = "P")]
    PartTime,
    #[sqlx(rename = "C")]
    Contract,
    #[sqlx(rename = "L")]
    LaidOff,
}

choice_table!(EmployeeStatus {
    FullTime => ("F", "Full Time"),
    PartTime => ("P", "Part Time"),
    Contract => ("C", "Contract"),
    LaidOff => ("L", "Laid Off"),
});

/// Gender matching PostgreSQL gender type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, sqlx::Type)]
#[sqlx(type_name = "gender")]
pub enum Gender {
    #[default]
    #[sqlx(rename = "M")]
    Male,
    #[sqlx(rename = "F")]
    Female,
}

choice_table!(Gender {
    Male => ("M", "Male"),
    Female => ("F", "Female"),
});

/// Pay period matching PostgreSQL pay_period type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, sqlx::Type)]
#[sqlx(type_name = "pay_period")]
pub enum PayPeriod {
    #[sqlx(rename = "D")]
    Daily,
    #[sqlx(rename = "W")]
    Weekly,
    #[default]
    #[sqlx(rename = "M")]
    Monthly,
    #[sqlx(rename = "Y")]
    Yearly,
}

choice_table!(PayPeriod {
    Daily => ("D", "Daily"),
    Weekly => ("W", "Weekly"),
    Monthly => ("M", "Monthly"),
    Yearly => ("Y", "Yearly"),
});

/// Employee record from the employees table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    pub id: Uuid,
    pub status: EmployeeStatus,
    pub gender: Gender,
    pub first_name: String,
    pub last_name: String,
    pub other_names: Option<String>,
    pub email: String,
    pub address: Option<String>,
    pub phone_numbers: Option<String>,
    pub emergency_numbers: Option<String>,
    pub date_of_birth: NaiveDate,
    pub job_title_id: Option<Uuid>,
    pub employer_id: Option<Uuid>,
    pub hiring_date: NaiveDate,
    pub current_salary: f64,
    pub starting_salary: f64,
    pub qualifications: Option<String>,
    pub completed_course_id: Option<Uuid>,
    pub rate_hour: Option<f64>,
    pub period: PayPeriod,
    pub per_period: Option<f64>,
    pub grade_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// "First Last" display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
