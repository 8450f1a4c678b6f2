//! Employer mutations

use async_graphql::{Context, InputObject, Object, ResultExt, ID};
use sqlx::PgPool;

use super::{created_message, delete_records, updated_message};
use crate::error::{ApiError, ApiResult};
use crate::graphql::guards::RoleGuard;
use crate::graphql::types::{DeletePayload, EmployerPayload, SUCCESS};
use crate::graphql::validation::{non_blank, optional_text, parse_id, reference, required_text};
use crate::models::{Employer, User};
use crate::repositories::{EmployerFields, EmployerRepository};

#[derive(Debug, Default, InputObject)]
pub struct EmployerInput {
    pub business_name: Option<String>,
    pub phone_numbers: Option<String>,
    pub website_link: Option<String>,
    pub address: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone_number: Option<String>,
    pub contact_role: Option<String>,
    /// User ID of the employer's account
    pub employer_details: Option<ID>,
    pub location: Option<String>,
    pub industry: Option<String>,
    pub size: Option<String>,
}

impl EmployerInput {
    /// Validated column values; `business_name` is only checked for blankness
    async fn into_fields(self, pool: &PgPool) -> ApiResult<EmployerFields> {
        Ok(EmployerFields {
            business_name: non_blank("business_name", self.business_name)?,
            phone_numbers: optional_text(self.phone_numbers),
            website_link: optional_text(self.website_link),
            address: optional_text(self.address),
            contact_name: optional_text(self.contact_name),
            contact_phone_number: optional_text(self.contact_phone_number),
            contact_role: optional_text(self.contact_role),
            user_id: reference::<User>(pool, self.employer_details.as_ref()).await?,
            location: optional_text(self.location),
            industry: optional_text(self.industry),
            size: optional_text(self.size),
        })
    }
}

#[derive(Default)]
pub struct EmployerMutation;

#[Object]
impl EmployerMutation {
    #[graphql(guard = "RoleGuard::editors()")]
    async fn create_employer(
        &self,
        ctx: &Context<'_>,
        input: EmployerInput,
    ) -> async_graphql::Result<EmployerPayload> {
        let pool = ctx.data::<PgPool>()?;
        create(pool, input).await.extend()
    }

    #[graphql(guard = "RoleGuard::editors()")]
    async fn update_employer(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: EmployerInput,
    ) -> async_graphql::Result<EmployerPayload> {
        let pool = ctx.data::<PgPool>()?;
        update(pool, &id, input).await.extend()
    }

    #[graphql(guard = "RoleGuard::editors()")]
    async fn delete_employers(
        &self,
        ctx: &Context<'_>,
        ids: Vec<ID>,
    ) -> async_graphql::Result<DeletePayload> {
        delete_records::<Employer>(ctx, &ids).await
    }
}

async fn create(pool: &PgPool, input: EmployerInput) -> ApiResult<EmployerPayload> {
    let business_name = required_text("business_name", input.business_name.clone())?;
    let fields = input.into_fields(pool).await?;

    let employer = EmployerRepository::new(pool.clone())
        .create(&business_name, &fields)
        .await?;

    tracing::info!(employer_id = %employer.id, "Employer created");

    Ok(EmployerPayload {
        status: SUCCESS.to_string(),
        message: created_message("Employer"),
        employer: employer.into(),
    })
}

async fn update(pool: &PgPool, id: &ID, input: EmployerInput) -> ApiResult<EmployerPayload> {
    let id = parse_id("Employer", id)?;
    let fields = input.into_fields(pool).await?;

    let employer = EmployerRepository::new(pool.clone())
        .update(id, &fields)
        .await?
        .ok_or_else(|| ApiError::not_found("Employer", id.to_string()))?;

    Ok(EmployerPayload {
        status: SUCCESS.to_string(),
        message: updated_message("Employer"),
        employer: employer.into(),
    })
}
