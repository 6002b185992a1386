//! # cadastro
//!
//! Validation of Brazilian registration data: CPF, CNPJ, CEP, DDD area codes,
//! phone numbers, e-mail addresses and UF abbreviations.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cadastro::validation::{is_valid_individual_id, is_valid_postal_code};
//!
//! assert!(is_valid_individual_id(Some("111.444.777-35")));
//! assert!(!is_valid_postal_code(Some("00000000")));
//! ```
//!
//! Whole records go through [`Registration`] and the [`Validate`] trait:
//!
//! ```rust,ignore
//! use cadastro::{Registration, Validate};
//!
//! let form: Registration = serde_json::from_str(body)?;
//! form.validate()?; // Err(HashMap<field, Vec<message>>)
//! ```
//!
//! ## Features
//!
//! - **`types`** - Include nutype validated types (`Cpf`, `Cnpj`, `Cep`, ...)
//! - **`full`** - All features enabled (default)
//!
//! ## Architecture
//!
//! This crate re-exports two component crates:
//!
//! - **`cadastro-validation`** - Pure boolean validators
//! - **`cadastro-types`** - Validated newtypes using nutype (optional)

use std::collections::HashMap;

pub mod config;
pub mod registration;

pub use config::ValidationConfig;
pub use registration::Registration;

#[cfg(feature = "types")]
pub use registration::ValidatedRegistration;

// Re-export validation functions (always available)
pub use cadastro_validation as validation;

// Re-export types module (if feature enabled)
#[cfg(feature = "types")]
pub use cadastro_types as types;

/// Trait for records that can be validated
pub trait Validate {
    /// Validates the record and returns validation errors
    ///
    /// Returns Ok(()) if valid, or Err with a map of field names to error messages
    fn validate(&self) -> Result<(), HashMap<String, Vec<String>>>;
}

/// Outcome of validating a record: field name to error messages
///
/// An empty error map means the record is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: HashMap<String, Vec<String>>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &HashMap<String, Vec<String>> {
        &self.errors
    }

    /// First message recorded for `field`
    pub fn first_error(&self, field: &str) -> Option<&str> {
        self.errors
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub(crate) fn push(&mut self, field: &str, message: String) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message);
    }

    /// `Ok(())` when valid, otherwise the error map
    pub fn into_result(self) -> Result<(), HashMap<String, Vec<String>>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

impl From<Result<(), HashMap<String, Vec<String>>>> for ValidationResult {
    fn from(result: Result<(), HashMap<String, Vec<String>>>) -> Self {
        Self {
            errors: result.err().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_is_valid() {
        let result = ValidationResult::default();
        assert!(result.is_valid());
        assert_eq!(result.first_error("cpf"), None);
        assert_eq!(result.into_result(), Ok(()));
    }

    #[test]
    fn test_pushed_errors_keep_order() {
        let mut result = ValidationResult::default();
        result.push("cpf", "invalid CPF".to_string());
        result.push("cpf", "cpf is required".to_string());

        assert!(!result.is_valid());
        assert_eq!(result.first_error("cpf"), Some("invalid CPF"));
        assert_eq!(result.errors()["cpf"].len(), 2);
        assert_eq!(result.first_error("email"), None);
    }

    #[test]
    fn test_from_result_round_trips_errors() {
        let mut errors = HashMap::new();
        errors.insert("cep".to_string(), vec!["invalid CEP".to_string()]);

        let result = ValidationResult::from(Err(errors.clone()));
        assert_eq!(result.first_error("cep"), Some("invalid CEP"));
        assert_eq!(result.into_result(), Err(errors));

        assert!(ValidationResult::from(Ok(())).is_valid());
    }
}
