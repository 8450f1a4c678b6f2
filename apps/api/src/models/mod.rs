//! Database models for Workforce
//!
//! One `sqlx::FromRow` struct per table, plus the PostgreSQL enum types
//! used for choice columns.

pub mod choice;
pub mod course;
pub mod department;
pub mod employee;
pub mod employer;
pub mod grade;
pub mod payroll;
pub mod title;
pub mod user;

pub use choice::Choice;
pub use course::{Course, CourseLevel};
pub use department::{Department, SubDepartment};
pub use employee::{Employee, EmployeeStatus, Gender, PayPeriod};
pub use employer::Employer;
pub use grade::Grade;
pub use payroll::Payroll;
pub use title::Title;
pub use user::{Claims, User, UserRole};
