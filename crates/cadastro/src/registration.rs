// File: src/registration.rs
// Purpose: Record-level validation of a registration form

use std::collections::HashMap;

use cadastro_validation::{self as validation, AbsentInput};
use serde::{Deserialize, Serialize};

use crate::config::ValidationConfig;
use crate::{Validate, ValidationResult};

/// Field names accepted in `ValidationConfig::required`
pub const FIELD_NAMES: [&str; 7] = [
    "cpf",
    "cnpj",
    "email",
    "area_code",
    "phone",
    "postal_code",
    "state",
];

/// A registration record as submitted, every field optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default)]
    pub cnpj: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub area_code: Option<i32>,
    #[serde(default)]
    pub phone: Option<i64>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl Registration {
    /// Validates every field under the given policy
    ///
    /// Absent fields are only errors when listed in `config.required`, except
    /// CPF/CNPJ, whose absence follows `config.absent_taxpayer_id_is_valid`.
    pub fn validate_with(
        &self,
        config: &ValidationConfig,
    ) -> Result<(), HashMap<String, Vec<String>>> {
        self.validate_result(config).into_result()
    }

    /// Same checks as [`Registration::validate_with`], kept as a `ValidationResult`
    pub fn validate_result(&self, config: &ValidationConfig) -> ValidationResult {
        for name in &config.required {
            if !FIELD_NAMES.contains(&name.as_str()) {
                tracing::warn!("Unknown required field in validation config: {}", name);
            }
        }

        let mut checker = Checker::new(config);

        checker.taxpayer(
            "cpf",
            self.cpf.as_deref(),
            validation::is_valid_individual_id_with,
            "invalid CPF",
        );
        checker.taxpayer(
            "cnpj",
            self.cnpj.as_deref(),
            validation::is_valid_company_id_with,
            "invalid CNPJ",
        );
        checker.optional(
            "email",
            self.email.as_deref(),
            validation::is_valid_email,
            "invalid e-mail address",
        );
        checker.optional(
            "area_code",
            self.area_code,
            validation::is_valid_area_code,
            "invalid DDD",
        );
        checker.optional(
            "phone",
            self.phone,
            validation::is_valid_phone,
            "invalid phone number",
        );
        checker.optional(
            "postal_code",
            self.postal_code.as_deref(),
            validation::is_valid_postal_code,
            "invalid CEP",
        );
        checker.optional(
            "state",
            self.state.as_deref(),
            validation::is_valid_state_abbreviation,
            "invalid UF",
        );

        checker.finish()
    }
}

impl Validate for Registration {
    fn validate(&self) -> Result<(), HashMap<String, Vec<String>>> {
        self.validate_with(&ValidationConfig::default())
    }
}

/// Collects per-field errors for one validation pass
struct Checker<'a> {
    config: &'a ValidationConfig,
    result: ValidationResult,
}

impl<'a> Checker<'a> {
    fn new(config: &'a ValidationConfig) -> Self {
        Self {
            config,
            result: ValidationResult::default(),
        }
    }

    fn push(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(field, %message, "Registration field rejected");
        self.result.push(field, message);
    }

    fn missing(&mut self, field: &str) {
        if self.config.is_required(field) {
            self.push(field, format!("{} is required", field));
        }
    }

    fn optional<T>(
        &mut self,
        field: &str,
        value: Option<T>,
        is_valid: fn(Option<T>) -> bool,
        message: &str,
    ) {
        let Some(value) = value else {
            self.missing(field);
            return;
        };

        if !is_valid(Some(value)) {
            self.push(field, message);
        }
    }

    fn taxpayer(
        &mut self,
        field: &str,
        value: Option<&str>,
        is_valid: fn(Option<&str>, AbsentInput) -> bool,
        message: &str,
    ) {
        if value.is_none() && self.config.is_required(field) {
            self.missing(field);
        } else if !is_valid(value, self.config.absent_input()) {
            self.push(field, message);
        }
    }

    fn finish(self) -> ValidationResult {
        self.result
    }
}

// =============================================================================
// Typed registration
// =============================================================================

#[cfg(feature = "types")]
pub use typed::ValidatedRegistration;

#[cfg(feature = "types")]
mod typed {
    use std::collections::HashMap;
    use std::fmt::Debug;

    use cadastro_types::{AreaCode, Cep, Cnpj, Cpf, EmailAddress, PhoneNumber, StateAbbreviation};

    use super::Registration;
    use crate::config::ValidationConfig;

    /// A registration whose present fields are all validated newtypes
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ValidatedRegistration {
        pub cpf: Option<Cpf>,
        pub cnpj: Option<Cnpj>,
        pub email: Option<EmailAddress>,
        pub area_code: Option<AreaCode>,
        pub phone: Option<PhoneNumber>,
        pub postal_code: Option<Cep>,
        pub state: Option<StateAbbreviation>,
    }

    impl Registration {
        /// Validates under `config`, then converts into validated newtypes
        pub fn into_validated(
            self,
            config: &ValidationConfig,
        ) -> Result<ValidatedRegistration, HashMap<String, Vec<String>>> {
            self.validate_with(config)?;

            let mut errors = HashMap::new();
            let validated = ValidatedRegistration {
                cpf: convert(&mut errors, "cpf", self.cpf, Cpf::try_new),
                cnpj: convert(&mut errors, "cnpj", self.cnpj, Cnpj::try_new),
                email: convert(&mut errors, "email", self.email, EmailAddress::try_new),
                area_code: convert(&mut errors, "area_code", self.area_code, AreaCode::try_new),
                phone: convert(&mut errors, "phone", self.phone, PhoneNumber::try_new),
                postal_code: convert(&mut errors, "postal_code", self.postal_code, Cep::try_new),
                state: convert(&mut errors, "state", self.state, StateAbbreviation::try_new),
            };

            if errors.is_empty() {
                Ok(validated)
            } else {
                Err(errors)
            }
        }
    }

    fn convert<R, T, E: Debug>(
        errors: &mut HashMap<String, Vec<String>>,
        field: &str,
        value: Option<R>,
        build: impl FnOnce(R) -> Result<T, E>,
    ) -> Option<T> {
        match value.map(build).transpose() {
            Ok(typed) => typed,
            Err(err) => {
                tracing::debug!(field, error = ?err, "Typed conversion rejected field");
                errors
                    .entry(field.to_string())
                    .or_default()
                    .push(format!("invalid {}", field));
                None
            }
        }
    }
}
