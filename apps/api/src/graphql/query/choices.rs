//! Option lists for coded fields

use async_graphql::Object;

use crate::graphql::guards::AuthGuard;
use crate::graphql::types::{choice_options, ChoiceOption};
use crate::models::{CourseLevel, EmployeeStatus, Gender, PayPeriod};

#[derive(Default)]
pub struct ChoiceQuery;

#[Object]
impl ChoiceQuery {
    /// Employment status options
    #[graphql(guard = "AuthGuard")]
    async fn status_options(&self) -> Vec<ChoiceOption> {
        choice_options::<EmployeeStatus>()
    }

    #[graphql(guard = "AuthGuard")]
    async fn gender_options(&self) -> Vec<ChoiceOption> {
        choice_options::<Gender>()
    }

    /// Pay period options
    #[graphql(guard = "AuthGuard")]
    async fn period_options(&self) -> Vec<ChoiceOption> {
        choice_options::<PayPeriod>()
    }

    #[graphql(guard = "AuthGuard")]
    async fn course_level_options(&self) -> Vec<ChoiceOption> {
        choice_options::<CourseLevel>()
    }
}
