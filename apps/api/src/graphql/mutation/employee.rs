//! Employee mutations

use async_graphql::{Context, InputObject, Object, ResultExt, ID};
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use super::{created_message, delete_records, updated_message};
use crate::error::{ApiError, ApiResult};
use crate::graphql::guards::RoleGuard;
use crate::graphql::types::{
    DeletePayload, EmployeePayload, EmployeeStatus, Gender, PayPeriod, SUCCESS,
};
use crate::graphql::validation::{
    non_blank, optional_text, parse_id, reference, references, required, required_text,
    validate_email,
};
use crate::models::{Course, Department, Employee, Employer, Grade, Title};
use crate::repositories::{EmployeeChanges, EmployeeRepository, NewEmployee};

/// Employee fields
///
/// Required on create: names, email, birth and hiring dates, and both
/// salaries. References are record IDs.
#[derive(Debug, Default, InputObject)]
pub struct EmployeeInput {
    pub status: Option<EmployeeStatus>,
    pub gender: Option<Gender>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub other_names: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone_numbers: Option<String>,
    pub emergency_numbers: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub job_title: Option<ID>,
    pub employer: Option<ID>,
    /// Department IDs; on update they are added to the current set
    pub departments: Option<Vec<ID>>,
    pub hiring_date: Option<NaiveDate>,
    pub current_salary: Option<f64>,
    pub starting_salary: Option<f64>,
    pub qualifications: Option<String>,
    pub completed_course: Option<ID>,
    pub rate_hour: Option<f64>,
    pub period: Option<PayPeriod>,
    pub per_period: Option<f64>,
    pub grade: Option<ID>,
}

/// Foreign keys of an employee input, parsed and checked
struct EmployeeRefs {
    job_title_id: Option<Uuid>,
    employer_id: Option<Uuid>,
    completed_course_id: Option<Uuid>,
    grade_id: Option<Uuid>,
    department_ids: Vec<Uuid>,
}

impl EmployeeInput {
    async fn resolve_refs(&self, pool: &PgPool) -> ApiResult<EmployeeRefs> {
        Ok(EmployeeRefs {
            job_title_id: reference::<Title>(pool, self.job_title.as_ref()).await?,
            employer_id: reference::<Employer>(pool, self.employer.as_ref()).await?,
            completed_course_id: reference::<Course>(pool, self.completed_course.as_ref()).await?,
            grade_id: reference::<Grade>(pool, self.grade.as_ref()).await?,
            department_ids: references::<Department>(pool, self.departments.as_deref()).await?,
        })
    }

    /// Validate scalar fields for create
    fn into_new(self, refs: EmployeeRefs) -> ApiResult<NewEmployee> {
        let email = required_text("email", self.email)?;
        validate_email(&email)?;

        Ok(NewEmployee {
            status: self.status.map(Into::into).unwrap_or_default(),
            gender: self.gender.map(Into::into).unwrap_or_default(),
            first_name: required_text("first_name", self.first_name)?,
            last_name: required_text("last_name", self.last_name)?,
            other_names: optional_text(self.other_names),
            email,
            address: optional_text(self.address),
            phone_numbers: optional_text(self.phone_numbers),
            emergency_numbers: optional_text(self.emergency_numbers),
            date_of_birth: required("date_of_birth", self.date_of_birth)?,
            job_title_id: refs.job_title_id,
            employer_id: refs.employer_id,
            hiring_date: required("hiring_date", self.hiring_date)?,
            current_salary: required("current_salary", self.current_salary)?,
            starting_salary: required("starting_salary", self.starting_salary)?,
            qualifications: optional_text(self.qualifications),
            completed_course_id: refs.completed_course_id,
            rate_hour: self.rate_hour,
            period: self.period.map(Into::into).unwrap_or_default(),
            per_period: self.per_period,
            grade_id: refs.grade_id,
            department_ids: refs.department_ids,
        })
    }

    /// Validate the fields that are set, for update
    fn into_changes(self, refs: EmployeeRefs) -> ApiResult<EmployeeChanges> {
        let email = non_blank("email", self.email)?;
        if let Some(email) = &email {
            validate_email(email)?;
        }

        Ok(EmployeeChanges {
            status: self.status.map(Into::into),
            gender: self.gender.map(Into::into),
            first_name: non_blank("first_name", self.first_name)?,
            last_name: non_blank("last_name", self.last_name)?,
            other_names: optional_text(self.other_names),
            email,
            address: optional_text(self.address),
            phone_numbers: optional_text(self.phone_numbers),
            emergency_numbers: optional_text(self.emergency_numbers),
            date_of_birth: self.date_of_birth,
            job_title_id: refs.job_title_id,
            employer_id: refs.employer_id,
            hiring_date: self.hiring_date,
            current_salary: self.current_salary,
            starting_salary: self.starting_salary,
            qualifications: optional_text(self.qualifications),
            completed_course_id: refs.completed_course_id,
            rate_hour: self.rate_hour,
            period: self.period.map(Into::into),
            per_period: self.per_period,
            grade_id: refs.grade_id,
            department_ids: refs.department_ids,
        })
    }
}

#[derive(Default)]
pub struct EmployeeMutation;

#[Object]
impl EmployeeMutation {
    #[graphql(guard = "RoleGuard::editors()")]
    async fn create_employee(
        &self,
        ctx: &Context<'_>,
        input: EmployeeInput,
    ) -> async_graphql::Result<EmployeePayload> {
        let pool = ctx.data::<PgPool>()?;
        create(pool, input).await.extend()
    }

    #[graphql(guard = "RoleGuard::editors()")]
    async fn update_employee(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: EmployeeInput,
    ) -> async_graphql::Result<EmployeePayload> {
        let pool = ctx.data::<PgPool>()?;
        update(pool, &id, input).await.extend()
    }

    #[graphql(guard = "RoleGuard::editors()")]
    async fn delete_employees(
        &self,
        ctx: &Context<'_>,
        ids: Vec<ID>,
    ) -> async_graphql::Result<DeletePayload> {
        delete_records::<Employee>(ctx, &ids).await
    }
}

async fn create(pool: &PgPool, input: EmployeeInput) -> ApiResult<EmployeePayload> {
    let refs = input.resolve_refs(pool).await?;
    let new = input.into_new(refs)?;

    let employee = EmployeeRepository::new(pool.clone()).create(&new).await?;

    tracing::info!(
        employee_id = %employee.id,
        departments = new.department_ids.len(),
        "Employee created"
    );

    Ok(EmployeePayload {
        status: SUCCESS.to_string(),
        message: created_message("Employee"),
        employee: employee.into(),
    })
}

async fn update(pool: &PgPool, id: &ID, input: EmployeeInput) -> ApiResult<EmployeePayload> {
    let id = parse_id("Employee", id)?;
    let refs = input.resolve_refs(pool).await?;
    let changes = input.into_changes(refs)?;

    let employee = EmployeeRepository::new(pool.clone())
        .update(id, &changes)
        .await?
        .ok_or_else(|| ApiError::not_found("Employee", id.to_string()))?;

    Ok(EmployeePayload {
        status: SUCCESS.to_string(),
        message: updated_message("Employee"),
        employee: employee.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeStatus as DbEmployeeStatus, PayPeriod as DbPayPeriod};

    fn no_refs() -> EmployeeRefs {
        EmployeeRefs {
            job_title_id: None,
            employer_id: None,
            completed_course_id: None,
            grade_id: None,
            department_ids: Vec::new(),
        }
    }

    fn complete_input() -> EmployeeInput {
        EmployeeInput {
            first_name: Some("Amina".into()),
            last_name: Some("Odhiambo".into()),
            email: Some("amina@example.com".into()),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 12),
            hiring_date: NaiveDate::from_ymd_opt(2021, 1, 4),
            current_salary: Some(5200.0),
            starting_salary: Some(4000.0),
            ..EmployeeInput::default()
        }
    }

    #[test]
    fn test_create_applies_choice_defaults() {
        let new = complete_input().into_new(no_refs()).unwrap();
        assert_eq!(new.status, DbEmployeeStatus::FullTime);
        assert_eq!(new.period, DbPayPeriod::Monthly);
        assert_eq!(new.first_name, "Amina");
    }

    #[test]
    fn test_create_reports_missing_field() {
        let input = EmployeeInput {
            hiring_date: None,
            ..complete_input()
        };
        let err = input.into_new(no_refs()).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
        assert_eq!(err.to_string(), "missing required field: hiring_date");
    }

    #[test]
    fn test_create_rejects_bad_email() {
        let input = EmployeeInput {
            email: Some("amina.example.com".into()),
            ..complete_input()
        };
        let err = input.into_new(no_refs()).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_update_rejects_blank_name() {
        let input = EmployeeInput {
            last_name: Some("  ".into()),
            ..EmployeeInput::default()
        };
        let err = input.into_changes(no_refs()).unwrap_err();
        assert_eq!(err.error_code(), "EMPTY_FIELD");
    }

    #[test]
    fn test_update_leaves_unset_fields_alone() {
        let changes = EmployeeInput {
            status: Some(EmployeeStatus::LaidOff),
            ..EmployeeInput::default()
        }
        .into_changes(no_refs())
        .unwrap();
        assert_eq!(changes.status, Some(DbEmployeeStatus::LaidOff));
        assert!(changes.first_name.is_none());
        assert!(changes.period.is_none());
        assert!(changes.department_ids.is_empty());
    }
}
