//! # Validation Utilities
//!
//! Input validation helpers run before any request leaves the client.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate email format: one `@`, a non-empty local part and a dotted domain.
pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return Err("Invalid email format".to_string());
    };

    let domain_ok = !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.');

    if local.is_empty() || !domain_ok || email.contains(char::is_whitespace) {
        Err("Invalid email format".to_string())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("admin@evmarket.vn").is_ok());
        assert!(validate_email("ops.team@mail.evmarket.vn").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("@evmarket.vn").is_err());
        assert!(validate_email("admin@").is_err());
        assert!(validate_email("admin@evmarket.").is_err());
        assert!(validate_email("ad min@evmarket.vn").is_err());
    }

    #[test]
    fn test_not_empty() {
        assert!(validate_not_empty("x", "Password").is_ok());
        assert_eq!(
            validate_not_empty("   ", "Password").unwrap_err(),
            "Password cannot be empty"
        );
    }
}
