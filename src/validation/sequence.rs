use super::digits::DigitsValidator;
use crate::models::rules::MAX_SEQUENCE;
use crate::utils::IdError;
use log::debug;

pub struct SequenceValidator;

impl SequenceValidator {
    /// Parses the sequence field and checks it is within `0..=9999`.
    ///
    /// The gender split of the range is deliberately not enforced.
    pub fn validate(sequence: &str) -> Result<u16, IdError> {
        let invalid = || IdError::InvalidSequence(sequence.to_string());

        if sequence.is_empty() {
            return Err(invalid());
        }
        DigitsValidator::validate(sequence).map_err(|_| invalid())?;

        // Leading zeros are fine, overflow of u32 is not
        let value = sequence.parse::<u32>().map_err(|_| invalid())?;
        if value > u32::from(MAX_SEQUENCE) {
            debug!("Rejected sequence {}: above {}", value, MAX_SEQUENCE);
            return Err(invalid());
        }
        Ok(value as u16)
    }
}

pub fn is_valid_sequence(sequence: &str) -> bool {
    SequenceValidator::validate(sequence).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_sequences() {
        assert!(is_valid_sequence("5297"));
        assert!(is_valid_sequence("9999"));
        assert!(is_valid_sequence("0000"));
        assert_eq!(SequenceValidator::validate("0042").unwrap(), 42);
    }

    #[test]
    fn test_out_of_range() {
        assert!(!is_valid_sequence("10000"));
        assert!(!is_valid_sequence("99999999999999999999"));
    }

    #[test]
    fn test_unparsable() {
        assert!(!is_valid_sequence(""));
        assert!(!is_valid_sequence("+123"));
        assert!(!is_valid_sequence("-001"));
        assert!(!is_valid_sequence("12a4"));
    }
}
