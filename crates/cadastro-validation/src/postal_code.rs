//! CEP (postal code) validation

use once_cell::sync::Lazy;
use regex::Regex;

static CEP_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{5}[0-9]{3}").unwrap());

/// Validates an 8-digit CEP, with or without the `-` separator
///
/// Rejects non-digits and single repeated-digit values like `"00000000"`.
/// Absent or empty input is invalid.
#[doc(alias = "cep")]
pub fn is_valid_postal_code(input: Option<&str>) -> bool {
    let Some(raw) = input.filter(|s| !s.is_empty()) else {
        return false;
    };

    let cep = raw.replace('-', "");
    if cep.len() != 8 || !cep.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let first = cep.as_bytes()[0];
    if cep.bytes().all(|b| b == first) {
        return false;
    }

    CEP_REGEX.is_match(&cep)
}
