use crate::models::rules::{self, ID_LENGTH};
use crate::models::*;
use crate::utils::IdError;
use crate::validation::*;
use log::debug;
use std::str::FromStr;

pub struct IdValidator;

impl IdValidator {
    pub fn new() -> Self {
        IdValidator
    }

    /// Runs the checks in order and stops at the first failure: length,
    /// digits, date, sequence, citizenship, legacy indicator, checksum.
    pub fn parse(id_number: &str) -> Result<IdNumber, IdError> {
        let length = id_number.chars().count();
        if length != ID_LENGTH {
            debug!("Rejected ID of length {}", length);
            return Err(IdError::InvalidLength(length));
        }

        let parsed = DigitsValidator::to_digits(id_number)?;
        let mut digits = [0u8; ID_LENGTH];
        digits.copy_from_slice(&parsed);

        // All ASCII from here on, so byte slicing is safe
        DateValidator::validate(&id_number[rules::DATE_OF_BIRTH])?;
        SequenceValidator::validate(&id_number[rules::SEQUENCE])?;
        CitizenshipValidator::validate(digits[rules::CITIZENSHIP])?;
        LegacyIndicatorValidator::validate(digits[rules::LEGACY_INDICATOR])?;
        ChecksumValidator::validate(id_number)?;

        Ok(IdNumber { digits })
    }

    pub fn validate(&self, id_number: &str) -> bool {
        Self::parse(id_number).is_ok()
    }

    /// Runs every check that can run and records an issue for each failure.
    pub fn validate_detailed(&self, id_number: &str) -> ValidationResult {
        let mut issues = Vec::new();

        let length = id_number.chars().count();
        let length_valid = length == ID_LENGTH;
        if !length_valid {
            issues.push(ValidationIssue {
                issue_type: ValidationIssueType::Length,
                message: IdError::InvalidLength(length).to_string(),
            });
        }

        let digits_valid = match DigitsValidator::validate(id_number) {
            Ok(()) => true,
            Err(err) => {
                issues.push(ValidationIssue {
                    issue_type: ValidationIssueType::Format,
                    message: err.to_string(),
                });
                false
            }
        };

        let mut result = ValidationResult {
            id_number: id_number.to_string(),
            is_valid: false,
            length_valid,
            digits_valid,
            date_valid: false,
            sequence_valid: false,
            citizenship_valid: false,
            legacy_indicator_valid: false,
            checksum_valid: false,
            issues: Vec::new(),
        };

        // Field checks only make sense on 13 ASCII digits
        if length_valid && digits_valid {
            let digit = |i: usize| id_number.as_bytes()[i] - b'0';

            result.date_valid = record(
                &mut issues,
                ValidationIssueType::Date,
                DateValidator::validate(&id_number[rules::DATE_OF_BIRTH]),
            );
            result.sequence_valid = record(
                &mut issues,
                ValidationIssueType::Sequence,
                SequenceValidator::validate(&id_number[rules::SEQUENCE]),
            );
            result.citizenship_valid = record(
                &mut issues,
                ValidationIssueType::Citizenship,
                CitizenshipValidator::validate(digit(rules::CITIZENSHIP)),
            );
            result.legacy_indicator_valid = record(
                &mut issues,
                ValidationIssueType::LegacyIndicator,
                LegacyIndicatorValidator::validate(digit(rules::LEGACY_INDICATOR)),
            );
            result.checksum_valid = record(
                &mut issues,
                ValidationIssueType::Checksum,
                ChecksumValidator::validate(id_number),
            );
        }

        result.is_valid = result.length_valid
            && result.digits_valid
            && result.date_valid
            && result.sequence_valid
            && result.citizenship_valid
            && result.legacy_indicator_valid
            && result.checksum_valid;
        result.issues = issues;
        result
    }
}

impl Default for IdValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn record<T>(
    issues: &mut Vec<ValidationIssue>,
    issue_type: ValidationIssueType,
    outcome: Result<T, IdError>,
) -> bool {
    match outcome {
        Ok(_) => true,
        Err(err) => {
            issues.push(ValidationIssue {
                issue_type,
                message: err.to_string(),
            });
            false
        }
    }
}

impl IdNumber {
    pub fn parse(id_number: &str) -> Result<Self, IdError> {
        IdValidator::parse(id_number)
    }
}

impl FromStr for IdNumber {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IdValidator::parse(s)
    }
}

/// `true` when `id_number` is a well-formed SA ID number.
pub fn validate(id_number: &str) -> bool {
    IdValidator::parse(id_number).is_ok()
}
