//! GraphQL tests that need no database
//!
//! Guards, argument validation and the option queries all resolve before
//! any query is sent, so these run against a pool that never connects.

mod common;

use workforce_api::models::user::UserRole;

use common::{data, execute, first_error_code, schema, unreachable_pool};

#[tokio::test]
async fn test_records_require_authentication() {
    let schema = schema(unreachable_pool());

    for query in [
        "{ employees { count } }",
        "{ payrolls(page: 2) { count } }",
        "{ me { id } }",
        "{ statusOptions { value } }",
    ] {
        let response = execute(&schema, query, None).await;
        assert_eq!(
            first_error_code(&response).as_deref(),
            Some("UNAUTHENTICATED"),
            "{query}"
        );
    }
}

#[tokio::test]
async fn test_staff_cannot_mutate() {
    let schema = schema(unreachable_pool());

    let response = execute(
        &schema,
        r#"mutation { createTitle(input: { titleName: "Analyst" }) { status } }"#,
        Some(UserRole::Staff),
    )
    .await;

    assert_eq!(first_error_code(&response).as_deref(), Some("FORBIDDEN"));
    assert!(response.errors[0].message.contains("admin or manager"));
}

#[tokio::test]
async fn test_anonymous_mutation_is_unauthenticated() {
    let schema = schema(unreachable_pool());

    let response = execute(
        &schema,
        r#"mutation { deleteGrades(ids: ["00000000-0000-0000-0000-000000000000"]) { deletedCount } }"#,
        None,
    )
    .await;

    assert_eq!(first_error_code(&response).as_deref(), Some("UNAUTHENTICATED"));
}

#[tokio::test]
async fn test_status_options_list_codes_and_labels() {
    let schema = schema(unreachable_pool());

    let response = execute(
        &schema,
        "{ statusOptions { value label } periodOptions { value label } }",
        Some(UserRole::Staff),
    )
    .await;
    let json = data(response);

    assert_eq!(
        json["statusOptions"],
        serde_json::json!([
            { "value": "F", "label": "Full Time" },
            { "value": "P", "label": "Part Time" },
            { "value": "C", "label": "Contract" },
            { "value": "L", "label": "Laid Off" },
        ])
    );
    assert_eq!(json["periodOptions"].as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn test_course_level_options() {
    let schema = schema(unreachable_pool());

    let json = data(
        execute(
            &schema,
            "{ courseLevelOptions { value label } genderOptions { value } }",
            Some(UserRole::Manager),
        )
        .await,
    );

    let levels: Vec<_> = json["courseLevelOptions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|option| option["value"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(levels, ["H", "DE", "DI", "M", "DO"]);
    assert_eq!(json["genderOptions"][0]["value"], "M");
}

#[tokio::test]
async fn test_malformed_id_is_rejected() {
    let schema = schema(unreachable_pool());

    let response = execute(&schema, r#"{ employee(id: "not-a-uuid") { id } }"#, Some(UserRole::Staff)).await;

    assert_eq!(first_error_code(&response).as_deref(), Some("INVALID_ID"));
    assert!(response.errors[0].message.contains("Employee"));
}

#[tokio::test]
async fn test_delete_with_malformed_id_is_rejected() {
    let schema = schema(unreachable_pool());

    let response = execute(
        &schema,
        r#"mutation { deletePayrolls(ids: ["nope"]) { deletedCount } }"#,
        Some(UserRole::Admin),
    )
    .await;

    assert_eq!(first_error_code(&response).as_deref(), Some("INVALID_ID"));
}

#[tokio::test]
async fn test_blank_title_name_is_rejected() {
    let schema = schema(unreachable_pool());

    let response = execute(
        &schema,
        r#"mutation { createTitle(input: { titleName: "   " }) { status } }"#,
        Some(UserRole::Admin),
    )
    .await;

    assert_eq!(first_error_code(&response).as_deref(), Some("EMPTY_FIELD"));
}

#[tokio::test]
async fn test_employee_create_requires_email() {
    let schema = schema(unreachable_pool());

    let response = execute(
        &schema,
        r#"mutation { createEmployee(input: { firstName: "Amina", lastName: "Odhiambo" }) { status } }"#,
        Some(UserRole::Admin),
    )
    .await;

    assert_eq!(first_error_code(&response).as_deref(), Some("MISSING_FIELD"));
    assert!(response.errors[0].message.contains("email"));
}

#[tokio::test]
async fn test_failed_login_hides_database_errors() {
    let schema = schema(unreachable_pool());

    let response = execute(
        &schema,
        r#"mutation { login(input: { email: "ops@example.com", password: "secret" }) { accessToken } }"#,
        None,
    )
    .await;

    assert_eq!(first_error_code(&response).as_deref(), Some("DATABASE_ERROR"));
    assert_eq!(response.errors[0].message, "An unexpected error occurred");
}
