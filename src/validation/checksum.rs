use super::digits::DigitsValidator;
use crate::models::rules::{CHECK_DIGIT, ID_LENGTH};
use crate::utils::IdError;
use log::{debug, trace};

/// Check digit scheme used by SA ID numbers.
///
/// This is a Luhn variant: the digits at even 1-based positions are not
/// doubled one by one but concatenated into a single numeral, which is
/// doubled once and then digit-summed. Digits at odd positions are added
/// as they are.
pub struct ChecksumValidator;

impl ChecksumValidator {
    /// Computes the expected check digit over the first 12 digits.
    pub fn check_digit(payload: &[u8]) -> u8 {
        let payload = &payload[..payload.len().min(CHECK_DIGIT)];

        let odd_sum: u32 = payload.iter().step_by(2).map(|d| u32::from(*d)).sum();

        // Six digits at most, so the doubled numeral stays below 2_000_000
        let even_numeral = payload
            .iter()
            .skip(1)
            .step_by(2)
            .fold(0u32, |acc, d| acc * 10 + u32::from(*d));
        let even_doubled = even_numeral * 2;
        let even_digit_sum = digit_sum(even_doubled);

        let total = odd_sum + even_digit_sum;
        trace!(
            "odd_sum={} even_numeral={} even_doubled={} even_digit_sum={} total={}",
            odd_sum,
            even_numeral,
            even_doubled,
            even_digit_sum,
            total
        );

        match total % 10 {
            0 => 0,
            rem => (10 - rem) as u8,
        }
    }

    pub fn validate(id_number: &str) -> Result<(), IdError> {
        let length = id_number.chars().count();
        if length != ID_LENGTH {
            return Err(IdError::InvalidLength(length));
        }
        let digits = DigitsValidator::to_digits(id_number)?;

        let expected = Self::check_digit(&digits);
        let found = digits[CHECK_DIGIT];
        if expected != found {
            debug!("Checksum mismatch: expected {}, found {}", expected, found);
            return Err(IdError::ChecksumMismatch { expected, found });
        }
        Ok(())
    }
}

fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

pub fn is_valid_checksum(id_number: &str) -> bool {
    ChecksumValidator::validate(id_number).is_ok()
}
