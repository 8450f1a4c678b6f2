//! Argument validation shared by queries and mutations
//!
//! Every failure is an [`ApiError`] so it reaches the client with a stable
//! error code.

use async_graphql::ID;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::repositories::search::{self, Searchable};

/// Parse a GraphQL ID into a record UUID
pub fn parse_id(resource_type: &'static str, id: &ID) -> ApiResult<Uuid> {
    Uuid::parse_str(id.trim()).map_err(|_| ApiError::invalid_id(resource_type, id.as_str()))
}

/// Parse a list of GraphQL IDs
pub fn parse_ids(resource_type: &'static str, ids: &[ID]) -> ApiResult<Vec<Uuid>> {
    ids.iter().map(|id| parse_id(resource_type, id)).collect()
}

/// A field that must be present on create
pub fn required<T>(field: &'static str, value: Option<T>) -> ApiResult<T> {
    value.ok_or(ApiError::MissingField(field))
}

/// A text field that must be present and not blank; returned trimmed
pub fn required_text(field: &'static str, value: Option<String>) -> ApiResult<String> {
    let value = required(field, value)?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

/// A required text field on update: absent is fine, blank is not
pub fn non_blank(field: &'static str, value: Option<String>) -> ApiResult<Option<String>> {
    value.map(|v| required_text(field, Some(v))).transpose()
}

/// An optional text field; blank input counts as absent
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Reject malformed email addresses
pub fn validate_email(email: &str) -> ApiResult<()> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ApiError::ValidationError(format!(
            "{} is not a valid email address",
            email
        )))
    }
}

/// Parse a reference to another record and check that it exists
pub async fn reference<T: Searchable>(pool: &PgPool, id: Option<&ID>) -> ApiResult<Option<Uuid>> {
    let Some(id) = id else {
        return Ok(None);
    };
    let id = parse_id(T::RESOURCE, id)?;
    search::ensure_exist::<T>(pool, &[id]).await?;
    Ok(Some(id))
}

/// Parse a list of references and check that all of them exist
pub async fn references<T: Searchable>(pool: &PgPool, ids: Option<&[ID]>) -> ApiResult<Vec<Uuid>> {
    let ids = match ids {
        Some(ids) if !ids.is_empty() => parse_ids(T::RESOURCE, ids)?,
        _ => return Ok(Vec::new()),
    };
    search::ensure_exist::<T>(pool, &ids).await?;
    Ok(ids)
}

/// Simple email validation
fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || email.len() > 254 {
        return false;
    }

    // Must have exactly one @ symbol
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }

    if local.is_empty() || local.len() > 64 {
        return false;
    }

    if domain.is_empty() || !domain.contains('.') {
        return false;
    }

    domain.split('.').all(|part| !part.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id("Employee", &ID(id.to_string())).unwrap(), id);

        let err = parse_id("Employee", &ID("42".into())).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ID");
        assert_eq!(err.to_string(), "invalid Employee id: 42");
    }

    #[test]
    fn test_required_text() {
        assert_eq!(
            required_text("first_name", Some("  Amina ".into())).unwrap(),
            "Amina"
        );
        assert_eq!(
            required_text("first_name", None).unwrap_err().error_code(),
            "MISSING_FIELD"
        );
        assert_eq!(
            required_text("first_name", Some("   ".into()))
                .unwrap_err()
                .error_code(),
            "EMPTY_FIELD"
        );
    }

    #[test]
    fn test_non_blank_allows_absent() {
        assert_eq!(non_blank("title_name", None).unwrap(), None);
        assert!(non_blank("title_name", Some("".into())).is_err());
    }

    #[test]
    fn test_optional_text_drops_blank() {
        assert_eq!(optional_text(Some("  ".into())), None);
        assert_eq!(optional_text(Some(" Nairobi ".into())), Some("Nairobi".into()));
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("test.user@domain.co.uk"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("invalid"));
        assert!(!is_valid_email("missing@domain"));
        assert!(!is_valid_email("@domain.com"));
        assert!(!is_valid_email("user@@domain.com"));
        assert!(!is_valid_email("user@domain..com"));
    }

    #[test]
    fn test_validate_email_error_code() {
        let err = validate_email("nope").unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }
}
