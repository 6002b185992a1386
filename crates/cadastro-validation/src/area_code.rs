//! DDD (area code) validation

/// Accepted DDD codes, grouped by leading digit
#[rustfmt::skip]
pub static AREA_CODES: &[i32] = &[
    11, 14, 16, 18, 19,
    21, 22, 24, 27, 28,
    31, 32, 33, 34, 35, 37, 38,
    41, 44, 46, 48, 49,
    51, 53, 54, 55,
    61, 63, 64, 65, 66, 67, 68, 69,
    71, 73, 74, 75, 77, 79,
    81, 82, 83, 84, 85, 86, 87, 88, 89,
    91, 92, 93, 94, 95, 96, 97, 98, 99,
];

/// Validates a two-digit DDD against the fixed whitelist
///
/// Absent input is invalid.
#[doc(alias = "ddd")]
pub fn is_valid_area_code(input: Option<i32>) -> bool {
    input.is_some_and(|ddd| AREA_CODES.contains(&ddd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_area_codes() {
        assert!(is_valid_area_code(Some(11)));
        assert!(is_valid_area_code(Some(21)));
        assert!(is_valid_area_code(Some(61)));
        assert!(is_valid_area_code(Some(99)));
    }

    #[test]
    fn test_invalid_area_codes() {
        assert!(!is_valid_area_code(None));
        assert!(!is_valid_area_code(Some(20)));
        assert!(!is_valid_area_code(Some(10)));
        assert!(!is_valid_area_code(Some(23)));
        assert!(!is_valid_area_code(Some(0)));
        assert!(!is_valid_area_code(Some(-11)));
        assert!(!is_valid_area_code(Some(111)));
    }

    #[test]
    fn test_whitelist_is_two_digit_and_sorted() {
        assert!(AREA_CODES.iter().all(|&ddd| (11..=99).contains(&ddd)));
        assert!(AREA_CODES.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(AREA_CODES.len(), 58);
    }
}
