pub mod id_validator;
pub mod models;
pub mod utils;
pub mod validation;

pub use id_validator::{validate, IdValidator};
pub use models::{Citizenship, IdNumber, LegacyIndicator, ValidationResult};
pub use utils::IdError;
pub use validation::{
    is_digits_only, is_valid_checksum, is_valid_citizenship, is_valid_date, is_valid_sequence,
};
