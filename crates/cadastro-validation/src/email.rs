//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// Local part: alphanumeric runs joined by single '.', '_' or '-'.
// Domain: alphanumeric labels joined by single '.' or '-', alphabetic TLD of 2+.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]([_.-]?[A-Za-z0-9]+)*@[A-Za-z0-9]+([.-]?[A-Za-z0-9]+)*\.[A-Za-z]{2,}$")
        .unwrap()
});

/// Validates basic email format
///
/// Structural check only: no DNS lookup, no length limits, no trimming.
/// Absent input is invalid.
pub fn is_valid_email(input: Option<&str>) -> bool {
    input.is_some_and(|email| EMAIL_REGEX.is_match(email))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email(Some("a@b.com")));
        assert!(is_valid_email(Some("user@example.com")));
        assert!(is_valid_email(Some("user.name@example.com.br")));
        assert!(is_valid_email(Some("user_name-x@sub-domain.example.org")));
        assert!(is_valid_email(Some("USER@EXAMPLE.COM")));
        assert!(is_valid_email(Some("user@123.com")));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(None));
        assert!(!is_valid_email(Some("")));
        assert!(!is_valid_email(Some("not-an-email")));
        assert!(!is_valid_email(Some("@example.com")));
        assert!(!is_valid_email(Some("user@")));
        assert!(!is_valid_email(Some("user@example")));
        assert!(!is_valid_email(Some("user@example.c")));
        assert!(!is_valid_email(Some("user@example.com1")));
        assert!(!is_valid_email(Some("user..name@example.com")));
        assert!(!is_valid_email(Some(".user@example.com")));
        assert!(!is_valid_email(Some("user.@example.com")));
        assert!(!is_valid_email(Some("user@@example.com")));
        assert!(!is_valid_email(Some("user@example..com")));
        assert!(!is_valid_email(Some("user+tag@example.com")));
        assert!(!is_valid_email(Some(" a@b.com")));
    }
}
