//! Input validation helpers
//!
//! Centralized text length constants and validation functions.

use shared::models::{BranchDetails, MenuItemInput};
use shared::{AppError, AppResult, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: branch, menu item, uploaded file
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: slug, phone, hours, category
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Menu item descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Map links
pub const MAX_URL_LEN: usize = 2048;

/// Branch "about" text
pub const MAX_ABOUT_LEN: usize = 2000;

// ── Validation helpers ──────────────────────────────────────────────

/// `[a-z0-9-]+`
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

pub fn validate_slug(slug: &str) -> AppResult<()> {
    if !is_valid_slug(slug) {
        return Err(AppError::new(ErrorCode::InvalidSlug).with_detail("slug", slug));
    }
    if slug.len() > MAX_SHORT_TEXT_LEN {
        return Err(too_long("slug", slug.len(), MAX_SHORT_TEXT_LEN));
    }
    Ok(())
}

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty"))
            .with_detail("field", field));
    }
    validate_optional_text(value, field, max_len)
}

/// Validate that a possibly-empty string is within the length limit.
pub fn validate_optional_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    let len = value.chars().count();
    if len > max_len {
        return Err(too_long(field, len, max_len));
    }
    Ok(())
}

fn too_long(field: &str, len: usize, max_len: usize) -> AppError {
    AppError::validation(format!(
        "{field} is too long ({len} chars, max {max_len})"
    ))
    .with_detail("field", field)
}

/// Validate (already trimmed) branch details, slug first
pub fn validate_branch_details(details: &BranchDetails) -> AppResult<()> {
    validate_slug(&details.slug)?;
    validate_optional_text(&details.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&details.address, "address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&details.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&details.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&details.map, "map", MAX_URL_LEN)?;
    validate_optional_text(&details.hours, "hours", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&details.about, "about", MAX_ABOUT_LEN)?;
    Ok(())
}

/// Validate menu inputs; the name must be non-empty once trimmed
pub fn validate_menu_input(input: &MenuItemInput) -> AppResult<()> {
    if input.name.trim().is_empty() {
        return Err(AppError::new(ErrorCode::MenuItemNameRequired).with_detail("field", "name"));
    }
    validate_optional_text(input.name.trim(), "name", MAX_NAME_LEN)?;
    validate_optional_text(&input.category, "category", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(input.desc.trim(), "desc", MAX_NOTE_LEN)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_pattern() {
        assert!(is_valid_slug("narapally"));
        assert!(is_valid_slug("new-branch-2"));
        assert!(is_valid_slug("-"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Narapally"));
        assert!(!is_valid_slug("narapally!"));
        assert!(!is_valid_slug("new branch"));
        assert!(!is_valid_slug("new_branch"));
    }

    #[test]
    fn test_validate_slug_error_code() {
        let err = validate_slug("Narapally!").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSlug);

        let long = "a".repeat(MAX_SHORT_TEXT_LEN + 1);
        let err = validate_slug(&long).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Uppal", "name", MAX_NAME_LEN).is_ok());
        let err = validate_required_text("   ", "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.message.contains("name"));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 100 multi-byte chars fit a 100-char limit
        let hours = "₹".repeat(MAX_SHORT_TEXT_LEN);
        assert!(validate_optional_text(&hours, "hours", MAX_SHORT_TEXT_LEN).is_ok());
    }

    #[test]
    fn test_menu_input_requires_name() {
        let err = validate_menu_input(&MenuItemInput::new("mains", "  ", "10", "")).unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemNameRequired);
        assert!(validate_menu_input(&MenuItemInput::new("mains", "Dal", "", "")).is_ok());
    }

    #[test]
    fn test_branch_details_checks_slug_first() {
        let details = BranchDetails {
            slug: "Bad Slug".to_string(),
            about: "x".repeat(MAX_ABOUT_LEN + 1),
            ..Default::default()
        };
        let err = validate_branch_details(&details).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSlug);
    }
}
