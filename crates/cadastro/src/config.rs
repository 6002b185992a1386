// File: src/config.rs
// Purpose: Validation policy parsing from cadastro.toml

use anyhow::{Context, Result};
use cadastro_validation::AbsentInput;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Record-level validation policy
///
/// ```toml
/// absent_taxpayer_id_is_valid = true
/// required = ["cpf", "email"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Verdict for a missing CPF/CNPJ that is not listed in `required`
    #[serde(default = "default_true")]
    pub absent_taxpayer_id_is_valid: bool,

    /// Field names that must be present
    #[serde(default)]
    pub required: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            absent_taxpayer_id_is_valid: default_true(),
            required: Vec::new(),
        }
    }
}

impl ValidationConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            tracing::debug!("No validation config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ValidationConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        tracing::debug!(
            required = ?config.required,
            absent_taxpayer_id_is_valid = config.absent_taxpayer_id_is_valid,
            "Loaded validation config from {:?}",
            path
        );

        Ok(config)
    }

    /// Load configuration from default path (./cadastro.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("cadastro.toml")
    }

    /// Absent-input verdict for the taxpayer id validators
    pub fn absent_input(&self) -> AbsentInput {
        if self.absent_taxpayer_id_is_valid {
            AbsentInput::Valid
        } else {
            AbsentInput::Invalid
        }
    }

    pub fn is_required(&self, field: &str) -> bool {
        self.required.iter().any(|name| name == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidationConfig::default();
        assert!(config.absent_taxpayer_id_is_valid);
        assert!(config.required.is_empty());
        assert_eq!(config.absent_input(), AbsentInput::Valid);
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<ValidationConfig>("").unwrap();
        assert_eq!(config, ValidationConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ValidationConfig = toml::from_str(r#"required = ["phone"]"#).unwrap();
        assert!(config.absent_taxpayer_id_is_valid);
        assert!(config.is_required("phone"));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(toml::from_str::<ValidationConfig>("required = 42").is_err());
        assert!(toml::from_str::<ValidationConfig>("absent_taxpayer_id_is_valid = \"yes\"").is_err());
    }

    #[test]
    fn test_custom_policy() {
        let toml = r#"
            absent_taxpayer_id_is_valid = false
            required = ["cpf", "email"]
        "#;
        let config: ValidationConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.absent_input(), AbsentInput::Invalid);
        assert!(config.is_required("cpf"));
        assert!(config.is_required("email"));
        assert!(!config.is_required("phone"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = ValidationConfig::load("does/not/exist/cadastro.toml").unwrap();
        assert_eq!(config, ValidationConfig::default());
    }
}
