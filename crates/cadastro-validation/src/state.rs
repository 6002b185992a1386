//! UF (federative unit) validation

/// The 27 Brazilian federative units
pub static FEDERATIVE_UNITS: [&str; 27] = [
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "GO", "ES", "MA", "MT", "MS", "MG", "PA", "PB", "PR",
    "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SP", "SC", "SE", "TO",
];

/// Validates a UF abbreviation, case-insensitively
///
/// Upper-casing is full Unicode, so `"ſp"` folds to `"SP"`. Absent input is
/// invalid. Whitespace is not trimmed.
#[doc(alias = "uf")]
pub fn is_valid_state_abbreviation(input: Option<&str>) -> bool {
    input.is_some_and(|uf| {
        let upper = uf.to_uppercase();
        FEDERATIVE_UNITS.contains(&upper.as_str())
    })
}
