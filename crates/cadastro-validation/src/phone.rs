//! Phone number validation (local number, no DDD)

use once_cell::sync::Lazy;
use regex::Regex;

// Eight free digits, an 8-digit 2-5 landline written with its hyphen, or nine
// digits led by 2-5 or 9 with an optional hyphen before the last four
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[0-9]{8}|[2-5][0-9]{3}-[0-9]{4}|[2-59][0-9]{4}-?[0-9]{4})$").unwrap()
});

/// Validates a landline or mobile number given as an integer
///
/// Absent input is invalid. Negative numbers never match.
pub fn is_valid_phone(input: Option<i64>) -> bool {
    input.is_some_and(|number| PHONE_REGEX.is_match(&number.to_string()))
}

/// Validates a phone number given as text, e.g. `"99876-5432"`
///
/// Surrounding whitespace is ignored. Absent input is invalid.
pub fn is_valid_phone_text(input: Option<&str>) -> bool {
    input.is_some_and(|number| PHONE_REGEX.is_match(number.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_eight_digit_numbers() {
        assert!(is_valid_phone(Some(32345678)));
        assert!(is_valid_phone(Some(12345678)));
        assert!(is_valid_phone(Some(99999999)));
    }

    #[test]
    fn test_mobile_numbers() {
        assert!(is_valid_phone(Some(998765432)));
        assert!(is_valid_phone(Some(912345678)));
    }

    #[rstest]
    #[case(234567890, true)]
    #[case(345678901, true)]
    #[case(512345678, true)]
    #[case(123456789, false)]
    #[case(612345678, false)]
    fn test_nine_digit_leading_digit(#[case] number: i64, #[case] expected: bool) {
        assert_eq!(is_valid_phone(Some(number)), expected);
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(!is_valid_phone(None));
        assert!(!is_valid_phone(Some(1234567)));
        assert!(!is_valid_phone(Some(123456789)));
        assert!(!is_valid_phone(Some(898765432)));
        assert!(!is_valid_phone(Some(9987654321)));
        assert!(!is_valid_phone(Some(-32345678)));
        assert!(!is_valid_phone(Some(0)));
    }

    #[test]
    fn test_text_numbers() {
        assert!(is_valid_phone_text(Some("99876-5432")));
        assert!(is_valid_phone_text(Some("3234-5678")));
        assert!(is_valid_phone_text(Some(" 998765432 ")));
        assert!(is_valid_phone_text(Some("12345678")));
        assert!(is_valid_phone_text(Some("23456-7890")));
        assert!(is_valid_phone_text(Some("234567890")));

        // The free eight-digit form has no hyphen
        assert!(!is_valid_phone_text(Some("1234-5678")));
        assert!(!is_valid_phone_text(Some("9987-65432")));
        assert!(!is_valid_phone_text(Some("2345-67890")));
        assert!(!is_valid_phone_text(Some("12345-6789")));
        assert!(!is_valid_phone_text(Some("99876--5432")));
        assert!(!is_valid_phone_text(Some("")));
        assert!(!is_valid_phone_text(None));
    }
}
