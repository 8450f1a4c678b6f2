//! GraphQL queries for Workforce
//!
//! Every query requires an authenticated caller.

mod choices;
mod records;
mod user;

pub use choices::ChoiceQuery;
pub use records::RecordQuery;
pub use user::UserQuery;

use async_graphql::MergedObject;

/// Root query type combining all query domains
#[derive(MergedObject, Default)]
pub struct Query(UserQuery, ChoiceQuery, RecordQuery);
