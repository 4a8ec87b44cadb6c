use crate::models::Citizenship;
use crate::utils::IdError;
use log::debug;

pub struct CitizenshipValidator;

impl CitizenshipValidator {
    pub fn validate(digit: u8) -> Result<Citizenship, IdError> {
        Citizenship::from_digit(digit).ok_or_else(|| {
            debug!("Rejected citizenship digit {}", digit);
            IdError::InvalidCitizenship(digit)
        })
    }
}

/// Accepts exactly one character, `0` (citizen) or `1` (permanent resident).
pub fn is_valid_citizenship(flag: &str) -> bool {
    match flag.as_bytes() {
        [b @ b'0'..=b'9'] => CitizenshipValidator::validate(b - b'0').is_ok(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citizen_and_resident() {
        assert!(is_valid_citizenship("0"));
        assert!(is_valid_citizenship("1"));
        assert_eq!(
            CitizenshipValidator::validate(1),
            Ok(Citizenship::PermanentResident)
        );
    }

    #[test]
    fn test_other_flags_rejected() {
        for flag in ["2", "8", "9", "", "01", "a", " "] {
            assert!(!is_valid_citizenship(flag), "flag should be invalid: {:?}", flag);
        }
        assert_eq!(
            CitizenshipValidator::validate(9),
            Err(IdError::InvalidCitizenship(9))
        );
    }
}
