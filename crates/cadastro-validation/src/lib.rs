//! Cadastro Validation Core
//!
//! Pure validation functions for Brazilian registration data. Every validator
//! takes one optional input and returns a boolean verdict; malformed input is
//! never an error, only `false`.
//!
//! | Validator | Absent input |
//! |---|---|
//! | [`is_valid_individual_id`] (CPF) | `true` |
//! | [`is_valid_company_id`] (CNPJ) | `true` |
//! | [`is_valid_area_code`] (DDD) | `false` |
//! | [`is_valid_phone`] | `false` |
//! | [`is_valid_email`] | `false` |
//! | [`is_valid_postal_code`] (CEP) | `false` |
//! | [`is_valid_state_abbreviation`] (UF) | `false` |

pub mod area_code;
pub mod email;
pub mod phone;
pub mod postal_code;
pub mod state;
pub mod taxpayer;

// Re-export all validators
pub use area_code::*;
pub use email::*;
pub use phone::*;
pub use postal_code::*;
pub use state::*;
pub use taxpayer::*;
