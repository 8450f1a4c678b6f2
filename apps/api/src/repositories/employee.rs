//! Employee repository
//!
//! Department membership lives in `employee_departments`. Creating and
//! updating an employee only ever adds memberships.

use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use super::search::{SearchField, Searchable};
use super::utils::EMPLOYEE_COLUMNS;
use crate::models::{Employee, EmployeeStatus, Gender, PayPeriod};

impl Searchable for Employee {
    const TABLE: &'static str = "employees";
    const RESOURCE: &'static str = "Employee";
    const COLUMNS: &'static str = EMPLOYEE_COLUMNS;
    const SEARCH_FIELDS: &'static [SearchField] = &[
        SearchField::Column("first_name"),
        SearchField::Column("last_name"),
        SearchField::Column("other_names"),
        SearchField::Column("email"),
        SearchField::Column("address"),
        SearchField::Column("phone_numbers"),
        SearchField::Column("emergency_numbers"),
        SearchField::Column("date_of_birth"),
        SearchField::Column("hiring_date"),
        SearchField::Column("qualifications"),
        SearchField::Related {
            from: "titles jt",
            on: "jt.id = t.job_title_id",
            columns: &["jt.title_name"],
        },
        SearchField::Related {
            from: "employers er LEFT JOIN users eu ON eu.id = er.user_id",
            on: "er.id = t.employer_id",
            columns: &[
                "er.business_name",
                "eu.username",
                "eu.first_name",
                "eu.last_name",
            ],
        },
        SearchField::Related {
            from: "employee_departments ed JOIN departments d ON d.id = ed.department_id",
            on: "ed.employee_id = t.id",
            columns: &["d.department_name"],
        },
        SearchField::Related {
            from: "courses c",
            on: "c.id = t.completed_course_id",
            columns: &["c.course_name"],
        },
        SearchField::Related {
            from: "grades g",
            on: "g.id = t.grade_id",
            columns: &["g.grade_name"],
        },
    ];
}

/// Values for a new employee
#[derive(Debug, Clone)]
pub struct NewEmployee {
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
    pub department_ids: Vec<Uuid>,
}

/// Partial update; `None` leaves the column unchanged
#[derive(Debug, Clone, Default)]
pub struct EmployeeChanges {
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
    pub job_title_id: Option<Uuid>,
    pub employer_id: Option<Uuid>,
    pub hiring_date: Option<NaiveDate>,
    pub current_salary: Option<f64>,
    pub starting_salary: Option<f64>,
    pub qualifications: Option<String>,
    pub completed_course_id: Option<Uuid>,
    pub rate_hour: Option<f64>,
    pub period: Option<PayPeriod>,
    pub per_period: Option<f64>,
    pub grade_id: Option<Uuid>,
    /// Departments to add to the current set
    pub department_ids: Vec<Uuid>,
}

/// Repository for employee database operations
#[derive(Clone)]
pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert an employee and its department memberships in one transaction
    pub async fn create(&self, employee: &NewEmployee) -> Result<Employee, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            r#"
            INSERT INTO employees (
                status, gender, first_name, last_name, other_names, email,
                address, phone_numbers, emergency_numbers, date_of_birth,
                job_title_id, employer_id, hiring_date, current_salary,
                starting_salary, qualifications, completed_course_id,
                rate_hour, period, per_period, grade_id
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11,
                $12, $13, $14, $15, $16, $17, $18, $19, $20, $21
            )
            RETURNING {EMPLOYEE_COLUMNS}
            "#
        );
        let created = sqlx::query_as::<_, Employee>(&sql)
            .bind(employee.status)
            .bind(employee.gender)
            .bind(&employee.first_name)
            .bind(&employee.last_name)
            .bind(&employee.other_names)
            .bind(&employee.email)
            .bind(&employee.address)
            .bind(&employee.phone_numbers)
            .bind(&employee.emergency_numbers)
            .bind(employee.date_of_birth)
            .bind(employee.job_title_id)
            .bind(employee.employer_id)
            .bind(employee.hiring_date)
            .bind(employee.current_salary)
            .bind(employee.starting_salary)
            .bind(&employee.qualifications)
            .bind(employee.completed_course_id)
            .bind(employee.rate_hour)
            .bind(employee.period)
            .bind(employee.per_period)
            .bind(employee.grade_id)
            .fetch_one(&mut *tx)
            .await?;

        add_departments(&mut tx, created.id, &employee.department_ids).await?;

        tx.commit().await?;
        Ok(created)
    }

    /// Apply a partial update and add department memberships
    ///
    /// # Returns
    /// * `Ok(None)` - If no employee with the given ID exists
    pub async fn update(
        &self,
        id: Uuid,
        changes: &EmployeeChanges,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            r#"
            UPDATE employees SET
                status = COALESCE($2, status),
                gender = COALESCE($3, gender),
                first_name = COALESCE($4, first_name),
                last_name = COALESCE($5, last_name),
                other_names = COALESCE($6, other_names),
                email = COALESCE($7, email),
                address = COALESCE($8, address),
                phone_numbers = COALESCE($9, phone_numbers),
                emergency_numbers = COALESCE($10, emergency_numbers),
                date_of_birth = COALESCE($11, date_of_birth),
                job_title_id = COALESCE($12, job_title_id),
                employer_id = COALESCE($13, employer_id),
                hiring_date = COALESCE($14, hiring_date),
                current_salary = COALESCE($15, current_salary),
                starting_salary = COALESCE($16, starting_salary),
                qualifications = COALESCE($17, qualifications),
                completed_course_id = COALESCE($18, completed_course_id),
                rate_hour = COALESCE($19, rate_hour),
                period = COALESCE($20, period),
                per_period = COALESCE($21, per_period),
                grade_id = COALESCE($22, grade_id),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {EMPLOYEE_COLUMNS}
            "#
        );
        let updated = sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .bind(changes.status)
            .bind(changes.gender)
            .bind(&changes.first_name)
            .bind(&changes.last_name)
            .bind(&changes.other_names)
            .bind(&changes.email)
            .bind(&changes.address)
            .bind(&changes.phone_numbers)
            .bind(&changes.emergency_numbers)
            .bind(changes.date_of_birth)
            .bind(changes.job_title_id)
            .bind(changes.employer_id)
            .bind(changes.hiring_date)
            .bind(changes.current_salary)
            .bind(changes.starting_salary)
            .bind(&changes.qualifications)
            .bind(changes.completed_course_id)
            .bind(changes.rate_hour)
            .bind(changes.period)
            .bind(changes.per_period)
            .bind(changes.grade_id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(updated) = updated else {
            return Ok(None);
        };

        add_departments(&mut tx, updated.id, &changes.department_ids).await?;

        tx.commit().await?;
        Ok(Some(updated))
    }
}

async fn add_departments(
    tx: &mut Transaction<'_, Postgres>,
    employee_id: Uuid,
    department_ids: &[Uuid],
) -> Result<(), sqlx::Error> {
    if department_ids.is_empty() {
        return Ok(());
    }
    sqlx::query(
        r#"
        INSERT INTO employee_departments (employee_id, department_id)
        SELECT $1, department_id FROM UNNEST($2::uuid[]) AS department_id
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(employee_id)
    .bind(department_ids)
    .execute(&mut **tx)
    .await?;
    Ok(())
}
