//! Shared utility functions for repositories

/// Escape special characters in ILIKE patterns to prevent pattern injection.
///
/// ILIKE uses `%` for any sequence and `_` for single character wildcards.
/// If user input contains these characters, they must be escaped to match literally.
///
/// # Example
/// ```
/// use workforce_api::repositories::utils::escape_ilike;
///
/// assert_eq!(escape_ilike("100%"), r"100\%");
/// ```
pub fn escape_ilike(pattern: &str) -> String {
    pattern
        .replace('\\', r"\\")
        .replace('%', r"\%")
        .replace('_', r"\_")
}

/// Turn a free-text search term into a substring ILIKE pattern.
///
/// NUL characters are dropped since PostgreSQL rejects them in text values.
/// Returns `None` for an absent or whitespace-only term, meaning "no filter".
pub fn search_pattern(term: Option<&str>) -> Option<String> {
    let term = term?.replace('\0', "");
    let term = term.trim();
    if term.is_empty() {
        None
    } else {
        Some(format!("%{}%", escape_ilike(term)))
    }
}

// ============================================================================
// SQL Column Constants
//
// SELECT column lists per table. List queries alias the base table as `t`,
// so none of these columns are qualified.
// ============================================================================

/// SQL columns for user queries
pub const USER_COLUMNS: &str = r#"
    id, email, username, first_name, last_name,
    password_hash, role, created_at, updated_at
"#;

/// SQL columns for grade queries
pub const GRADE_COLUMNS: &str = r#"
    id, grade_name, grade_basic, grade_da, grade_ta,
    grade_bonus, grade_pf, created_at, updated_at
"#;

/// SQL columns for title queries
pub const TITLE_COLUMNS: &str = "id, title_name, created_at, updated_at";

/// SQL columns for course queries
pub const COURSE_COLUMNS: &str = "id, course_name, course_level, created_at, updated_at";

/// SQL columns for department queries
pub const DEPARTMENT_COLUMNS: &str = "id, department_name, pay_grade_id, created_at, updated_at";

/// SQL columns for employer queries
pub const EMPLOYER_COLUMNS: &str = r#"
    id, business_name, phone_numbers, website_link, address,
    contact_name, contact_phone_number, contact_role, user_id,
    location, industry, size, created_at, updated_at
"#;

/// SQL columns for employee queries
pub const EMPLOYEE_COLUMNS: &str = r#"
    id, status, gender, first_name, last_name, other_names,
    email, address, phone_numbers, emergency_numbers,
    date_of_birth, job_title_id, employer_id, hiring_date,
    current_salary, starting_salary, qualifications,
    completed_course_id, rate_hour, period, per_period, grade_id,
    created_at, updated_at
"#;

/// SQL columns for payroll queries
pub const PAYROLL_COLUMNS: &str = r#"
    id, period_number, employee_net_salary, employee_gross_salary,
    reimbursment_date, employee_id, grade_id, created_at, updated_at
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_ilike_no_special_chars() {
        assert_eq!(escape_ilike("hello world"), "hello world");
    }

    #[test]
    fn test_escape_ilike_percent() {
        assert_eq!(escape_ilike("100% complete"), r"100\% complete");
    }

    #[test]
    fn test_escape_ilike_underscore() {
        assert_eq!(escape_ilike("first_name"), r"first\_name");
    }

    #[test]
    fn test_escape_ilike_all_special() {
        assert_eq!(escape_ilike(r"100%_\test"), r"100\%\_\\test");
    }

    #[test]
    fn test_search_pattern_trims_and_wraps() {
        assert_eq!(search_pattern(Some("  ann ")), Some("%ann%".to_string()));
    }

    #[test]
    fn test_search_pattern_blank_is_no_filter() {
        assert_eq!(search_pattern(None), None);
        assert_eq!(search_pattern(Some("")), None);
        assert_eq!(search_pattern(Some(" \t\n")), None);
    }

    #[test]
    fn test_search_pattern_drops_nul() {
        assert_eq!(search_pattern(Some("a\0b")), Some("%ab%".to_string()));
        assert_eq!(search_pattern(Some(" \0 ")), None);
    }
}
