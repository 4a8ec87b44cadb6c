use crate::models::LegacyIndicator;
use crate::utils::IdError;
use log::debug;

pub struct LegacyIndicatorValidator;

impl LegacyIndicatorValidator {
    pub fn validate(digit: u8) -> Result<LegacyIndicator, IdError> {
        LegacyIndicator::from_digit(digit).ok_or_else(|| {
            debug!("Rejected legacy indicator digit {}", digit);
            IdError::InvalidLegacyIndicator(digit)
        })
    }
}
