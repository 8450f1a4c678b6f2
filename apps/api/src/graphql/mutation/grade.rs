//! Grade mutations

use async_graphql::{Context, InputObject, Object, ResultExt, ID};
use sqlx::PgPool;

use super::{created_message, delete_records, updated_message};
use crate::error::{ApiError, ApiResult};
use crate::graphql::guards::RoleGuard;
use crate::graphql::types::{DeletePayload, GradePayload, SUCCESS};
use crate::graphql::validation::{non_blank, parse_id, required, required_text};
use crate::models::Grade;
use crate::repositories::{GradeChanges, GradeRepository, NewGrade};

/// Grade fields; all six are required on create
#[derive(Debug, Default, InputObject)]
pub struct GradeInput {
    pub grade_name: Option<String>,
    pub grade_basic: Option<String>,
    pub grade_da: Option<String>,
    pub grade_ta: Option<String>,
    pub grade_bonus: Option<f64>,
    pub grade_pf: Option<String>,
}

impl GradeInput {
    fn into_new(self) -> ApiResult<NewGrade> {
        Ok(NewGrade {
            grade_name: required_text("grade_name", self.grade_name)?,
            grade_basic: required_text("grade_basic", self.grade_basic)?,
            grade_da: required_text("grade_da", self.grade_da)?,
            grade_ta: required_text("grade_ta", self.grade_ta)?,
            grade_bonus: required("grade_bonus", self.grade_bonus)?,
            grade_pf: required_text("grade_pf", self.grade_pf)?,
        })
    }

    fn into_changes(self) -> ApiResult<GradeChanges> {
        Ok(GradeChanges {
            grade_name: non_blank("grade_name", self.grade_name)?,
            grade_basic: non_blank("grade_basic", self.grade_basic)?,
            grade_da: non_blank("grade_da", self.grade_da)?,
            grade_ta: non_blank("grade_ta", self.grade_ta)?,
            grade_bonus: self.grade_bonus,
            grade_pf: non_blank("grade_pf", self.grade_pf)?,
        })
    }
}

#[derive(Default)]
pub struct GradeMutation;

#[Object]
impl GradeMutation {
    #[graphql(guard = "RoleGuard::editors()")]
    async fn create_grade(
        &self,
        ctx: &Context<'_>,
        input: GradeInput,
    ) -> async_graphql::Result<GradePayload> {
        let pool = ctx.data::<PgPool>()?;
        create(pool, input).await.extend()
    }

    #[graphql(guard = "RoleGuard::editors()")]
    async fn update_grade(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: GradeInput,
    ) -> async_graphql::Result<GradePayload> {
        let pool = ctx.data::<PgPool>()?;
        update(pool, &id, input).await.extend()
    }

    #[graphql(guard = "RoleGuard::editors()")]
    async fn delete_grades(
        &self,
        ctx: &Context<'_>,
        ids: Vec<ID>,
    ) -> async_graphql::Result<DeletePayload> {
        delete_records::<Grade>(ctx, &ids).await
    }
}

async fn create(pool: &PgPool, input: GradeInput) -> ApiResult<GradePayload> {
    let grade = GradeRepository::new(pool.clone())
        .create(&input.into_new()?)
        .await?;

    tracing::info!(grade_id = %grade.id, "Grade created");

    Ok(GradePayload {
        status: SUCCESS.to_string(),
        message: created_message("Grade"),
        grade: grade.into(),
    })
}

async fn update(pool: &PgPool, id: &ID, input: GradeInput) -> ApiResult<GradePayload> {
    let id = parse_id("Grade", id)?;
    let grade = GradeRepository::new(pool.clone())
        .update(id, &input.into_changes()?)
        .await?
        .ok_or_else(|| ApiError::not_found("Grade", id.to_string()))?;

    Ok(GradePayload {
        status: SUCCESS.to_string(),
        message: updated_message("Grade"),
        grade: grade.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_input() -> GradeInput {
        GradeInput {
            grade_name: Some("G4".into()),
            grade_basic: Some("42000".into()),
            grade_da: Some("10%".into()),
            grade_ta: Some("3000".into()),
            grade_bonus: Some(1500.0),
            grade_pf: Some("12%".into()),
        }
    }

    #[test]
    fn test_create_requires_every_field() {
        let input = GradeInput {
            grade_bonus: None,
            ..full_input()
        };
        let err = input.into_new().unwrap_err();
        assert_eq!(err.to_string(), "missing required field: grade_bonus");
    }

    #[test]
    fn test_update_rejects_blank_text() {
        let input = GradeInput {
            grade_pf: Some(" ".into()),
            ..GradeInput::default()
        };
        assert_eq!(input.into_changes().unwrap_err().error_code(), "EMPTY_FIELD");
    }

    #[test]
    fn test_update_keeps_unset_fields() {
        let changes = GradeInput {
            grade_name: Some("G5".into()),
            ..GradeInput::default()
        }
        .into_changes()
        .unwrap();
        assert_eq!(changes.grade_name.as_deref(), Some("G5"));
        assert!(changes.grade_basic.is_none());
        assert!(changes.grade_bonus.is_none());
    }
}
