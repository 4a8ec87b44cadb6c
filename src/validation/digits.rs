use crate::utils::IdError;
use log::debug;

pub struct DigitsValidator;

impl DigitsValidator {
    /// Fails on the first character that is not an ASCII digit.
    pub fn validate(input: &str) -> Result<(), IdError> {
        match input.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
            Some((position, found)) => {
                debug!("Rejected non-digit {:?} at position {}", found, position);
                Err(IdError::NonDigit { position, found })
            }
            None => Ok(()),
        }
    }

    /// Converts an all-digit string to its digit values.
    pub(crate) fn to_digits(input: &str) -> Result<Vec<u8>, IdError> {
        Self::validate(input)?;
        Ok(input.bytes().map(|b| b - b'0').collect())
    }
}

/// `true` when every character is `0`-`9`. Signs, whitespace and
/// separators are rejected. The empty string has no non-digit, so it passes
/// here and is left to the length check.
pub fn is_digits_only(input: &str) -> bool {
    DigitsValidator::validate(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only() {
        assert!(is_digits_only("0411035297083"));
        assert!(is_digits_only("0"));
    }

    #[test]
    fn test_rejects_separators_and_signs() {
        assert!(!is_digits_only("041103 5297083"));
        assert!(!is_digits_only("041103-5297083"));
        assert!(!is_digits_only("+411035297083"));
        assert!(!is_digits_only("0411A035297083"));
        assert!(!is_digits_only("   "));
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        // Arabic-Indic and fullwidth digits are numeric but not ASCII
        assert!(!is_digits_only("٠٤١١٠٣"));
        assert!(!is_digits_only("０４１１"));
    }

    #[test]
    fn test_reports_first_offending_position() {
        assert_eq!(
            DigitsValidator::validate("04x1y"),
            Err(IdError::NonDigit { position: 2, found: 'x' })
        );
    }

    #[test]
    fn test_to_digits() {
        assert_eq!(DigitsValidator::to_digits("0419").unwrap(), vec![0, 4, 1, 9]);
        assert!(DigitsValidator::to_digits("04.9").is_err());
    }
}
