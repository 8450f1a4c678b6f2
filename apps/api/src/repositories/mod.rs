//! Database repository layer for Workforce
//!
//! One repository per table for inserts and updates. Listing, lookup by ID
//! and bulk deletion are shared by every table through [`search`].

pub mod course;
pub mod department;
pub mod employee;
pub mod employer;
pub mod grade;
pub mod payroll;
pub mod search;
pub mod title;
pub mod user;
pub mod utils;

pub use course::CourseRepository;
pub use department::DepartmentRepository;
pub use employee::{EmployeeChanges, EmployeeRepository, NewEmployee};
pub use employer::{EmployerFields, EmployerRepository};
pub use grade::{GradeChanges, GradeRepository, NewGrade};
pub use payroll::{NewPayroll, PayrollChanges, PayrollRepository};
pub use search::{SearchField, Searchable};
pub use title::TitleRepository;
pub use user::UserRepository;
