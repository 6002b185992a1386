//! Validated Brazilian registration types
//!
//! Newtype wrappers built with the `nutype` crate. Each type runs the matching
//! `cadastro-validation` function at construction time, so a value that exists
//! is a value that passed validation.
//!
//! # Stored form
//!
//! Types store the *normalised* value, never the raw input:
//!
//! - `Cpf` / `Cnpj` - digits only (separators stripped)
//! - `Cep` - 8 digits (`-` stripped)
//! - `StateAbbreviation` - upper-case UF code
//!
//! # Absent values
//!
//! A type can only be built from a present value. The "absent CPF/CNPJ is
//! valid" rule of the plain functions is modelled with `Option<Cpf>` at the
//! record level instead.
//!
//! # Example
//!
//! ```rust,ignore
//! use cadastro_types::{Cpf, StateAbbreviation};
//!
//! let cpf = Cpf::try_new("111.444.777-35".to_string())?;
//! assert_eq!(cpf.as_ref(), "11144477735");
//!
//! let uf = StateAbbreviation::try_new("sp".to_string())?;
//! assert_eq!(uf.as_ref(), "SP");
//! ```

use cadastro_validation::{taxpayer, AbsentInput};
use nutype::nutype;

// =============================================================================
// Taxpayer Ids
// =============================================================================

/// CPF (individual taxpayer id)
///
/// **Business Rule**: 11 digits, two modulo-11 check digits, not a single
/// repeated digit. Accepts `.`/`-` punctuation and surrounding whitespace.
#[nutype(
    sanitize(with = normalize_cpf),
    validate(predicate = is_cpf),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Cpf(String);

/// CNPJ (company taxpayer id)
///
/// **Business Rule**: 14 digits, two modulo-11 check digits. Accepts
/// `.`/`-`/`/` punctuation and surrounding whitespace.
#[nutype(
    sanitize(with = normalize_cnpj),
    validate(predicate = is_cnpj),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Cnpj(String);

// -----------------------------------------------------------------------------
// Taxpayer predicates
// -----------------------------------------------------------------------------

fn normalize_cpf(raw: String) -> String {
    taxpayer::CPF.normalize(&raw)
}

fn normalize_cnpj(raw: String) -> String {
    taxpayer::CNPJ.normalize(&raw)
}

fn is_cpf(s: &str) -> bool {
    taxpayer::is_valid_individual_id_with(Some(s), AbsentInput::Invalid)
}

fn is_cnpj(s: &str) -> bool {
    taxpayer::is_valid_company_id_with(Some(s), AbsentInput::Invalid)
}

// =============================================================================
// Address and Contact Types
// =============================================================================

/// CEP (postal code)
///
/// **Business Rule**: 8 digits after removing `-`, not a single repeated digit.
#[nutype(
    sanitize(with = strip_hyphens),
    validate(predicate = is_cep),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Cep(String);

/// UF (federative unit) abbreviation, stored upper-case
#[nutype(
    sanitize(trim, uppercase),
    validate(predicate = is_state),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct StateAbbreviation(String);

/// Email address
///
/// **Business Rule**: Structural check only (see
/// `cadastro_validation::is_valid_email`). No DNS lookup.
#[nutype(
    validate(predicate = is_email),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct EmailAddress(String);

/// DDD area code
#[nutype(
    validate(predicate = is_area_code),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct AreaCode(i32);

/// Local phone number (no DDD)
///
/// **Business Rule**: 8 digits, or 9 digits with a mobile `9x` prefix.
#[nutype(
    validate(predicate = is_phone),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct PhoneNumber(i64);

// -----------------------------------------------------------------------------
// Address and contact predicates
// -----------------------------------------------------------------------------

fn strip_hyphens(raw: String) -> String {
    raw.replace('-', "")
}

fn is_cep(s: &str) -> bool {
    cadastro_validation::is_valid_postal_code(Some(s))
}

fn is_state(s: &str) -> bool {
    cadastro_validation::is_valid_state_abbreviation(Some(s))
}

fn is_email(s: &str) -> bool {
    cadastro_validation::is_valid_email(Some(s))
}

fn is_area_code(ddd: &i32) -> bool {
    cadastro_validation::is_valid_area_code(Some(*ddd))
}

fn is_phone(number: &i64) -> bool {
    cadastro_validation::is_valid_phone(Some(*number))
}

// =============================================================================
// Tests
// =============================================================================
