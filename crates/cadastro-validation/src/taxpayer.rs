//! Taxpayer identifier validation (CPF and CNPJ)
//!
//! Both identifiers carry two trailing modulo-11 check digits. They differ
//! only in length, accepted separators and weight tables, so a single
//! [`CheckDigitScheme`] drives both.

/// Verdict returned when no value is provided at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AbsentInput {
    /// Absence is vacuously valid (historical behaviour for CPF/CNPJ)
    #[default]
    Valid,
    /// Absence is rejected like any other malformed value
    Invalid,
}

impl AbsentInput {
    fn verdict(self) -> bool {
        matches!(self, AbsentInput::Valid)
    }
}

/// Parameters of a two-digit modulo-11 identifier
///
/// Only the [`CPF`] and [`CNPJ`] schemes exist; fields are read through
/// accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckDigitScheme {
    name: &'static str,
    length: usize,
    separators: &'static [char],
    first_weights: &'static [u32],
    second_weights: &'static [u32],
    reject_repeated: bool,
}

/// CPF: 11 digits, `.` and `-` separators
pub const CPF: CheckDigitScheme = CheckDigitScheme {
    name: "CPF",
    length: 11,
    separators: &['.', '-'],
    first_weights: &[10, 9, 8, 7, 6, 5, 4, 3, 2],
    second_weights: &[11, 10, 9, 8, 7, 6, 5, 4, 3, 2],
    reject_repeated: true,
};

/// CNPJ: 14 digits, `.`, `-` and `/` separators
pub const CNPJ: CheckDigitScheme = CheckDigitScheme {
    name: "CNPJ",
    length: 14,
    separators: &['.', '-', '/'],
    first_weights: &[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2],
    second_weights: &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2],
    reject_repeated: false,
};

impl CheckDigitScheme {
    /// Human-readable name, used in log output
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Total number of digits, check digits included
    pub fn length(&self) -> usize {
        self.length
    }

    /// Characters stripped before any structural check
    pub fn separators(&self) -> &'static [char] {
        self.separators
    }

    /// Trims whitespace and removes this scheme's separators
    pub fn normalize(&self, raw: &str) -> String {
        raw.trim()
            .chars()
            .filter(|c| !self.separators.contains(c))
            .collect()
    }

    /// Validates a raw (possibly punctuated) identifier
    pub fn is_valid(&self, raw: &str) -> bool {
        let Some(base_len) = self.length.checked_sub(2).filter(|&n| n > 0) else {
            return false;
        };

        let normalized = self.normalize(raw);

        if normalized.len() != self.length || !normalized.bytes().all(|b| b.is_ascii_digit()) {
            tracing::trace!(scheme = self.name, "rejected by shape");
            return false;
        }

        let digits: Vec<u8> = normalized.bytes().map(|b| b - b'0').collect();

        if self.reject_repeated && digits.iter().all(|&d| d == digits[0]) {
            tracing::trace!(scheme = self.name, "rejected repeated-digit sequence");
            return false;
        }

        let (base, given) = digits.split_at(base_len);
        check_digits(self, base).is_some_and(|computed| computed.as_slice() == given)
    }
}

/// Computes the two check digits for `base`
///
/// `base` holds digit values (0-9), not ASCII. Returns `None` when its length
/// does not match the scheme's weight tables.
pub fn check_digits(scheme: &CheckDigitScheme, base: &[u8]) -> Option<[u8; 2]> {
    if base.len() != scheme.first_weights.len()
        || scheme.second_weights.len() != base.len() + 1
        || base.iter().any(|&d| d > 9)
    {
        return None;
    }

    let first = mod11_digit(base, scheme.first_weights);

    let mut extended = base.to_vec();
    extended.push(first);
    let second = mod11_digit(&extended, scheme.second_weights);

    Some([first, second])
}

fn mod11_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * w)
        .sum();

    match sum % 11 {
        rest if rest < 2 => 0,
        // rest is in 2..=10, so the digit fits in 1..=9
        rest => (11 - rest) as u8,
    }
}

/// Validates a CPF (individual taxpayer id)
///
/// Absent input is treated as valid. Use [`is_valid_individual_id_with`] to
/// choose a different verdict.
#[doc(alias = "cpf")]
pub fn is_valid_individual_id(input: Option<&str>) -> bool {
    is_valid_individual_id_with(input, AbsentInput::Valid)
}

/// Validates a CPF with an explicit verdict for absent input
pub fn is_valid_individual_id_with(input: Option<&str>, absent: AbsentInput) -> bool {
    match input {
        Some(raw) => CPF.is_valid(raw),
        None => absent.verdict(),
    }
}

/// Validates a CNPJ (company taxpayer id)
///
/// Absent input is treated as valid. Use [`is_valid_company_id_with`] to
/// choose a different verdict.
#[doc(alias = "cnpj")]
pub fn is_valid_company_id(input: Option<&str>) -> bool {
    is_valid_company_id_with(input, AbsentInput::Valid)
}

/// Validates a CNPJ with an explicit verdict for absent input
pub fn is_valid_company_id_with(input: Option<&str>, absent: AbsentInput) -> bool {
    match input {
        Some(raw) => CNPJ.is_valid(raw),
        None => absent.verdict(),
    }
}
