use super::rules::{self, Citizenship, LegacyIndicator, ID_LENGTH};
use chrono::NaiveDate;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use std::fmt;

/// A 13-digit ID number that passed every check.
///
/// Only [`IdValidator::parse`](crate::IdValidator::parse) (or `str::parse`)
/// builds one, so the accessors never have to re-check the fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdNumber {
    pub(crate) digits: [u8; ID_LENGTH],
}

impl IdNumber {
    pub fn digits(&self) -> &[u8; ID_LENGTH] {
        &self.digits
    }

    /// The raw `YYMMDD` token.
    pub fn date_token(&self) -> String {
        self.digits[rules::DATE_OF_BIRTH]
            .iter()
            .map(|d| char::from(b'0' + d))
            .collect()
    }

    /// Two-digit year, month and day as written in the ID.
    pub fn date_parts(&self) -> (u8, u8, u8) {
        let pair = |i: usize| self.digits[i] * 10 + self.digits[i + 1];
        (pair(0), pair(2), pair(4))
    }

    /// Resolves the date of birth against a caller-chosen century base
    /// (`1900`, `2000`, ...). The ID itself carries no century.
    pub fn date_of_birth_in(&self, century: i32) -> Option<NaiveDate> {
        let (yy, mm, dd) = self.date_parts();
        NaiveDate::from_ymd_opt(century + i32::from(yy), u32::from(mm), u32::from(dd))
    }

    pub fn sequence(&self) -> u16 {
        self.digits[rules::SEQUENCE]
            .iter()
            .fold(0u16, |acc, d| acc * 10 + u16::from(*d))
    }

    pub fn citizenship(&self) -> Citizenship {
        match self.digits[rules::CITIZENSHIP] {
            1 => Citizenship::PermanentResident,
            _ => Citizenship::Citizen,
        }
    }

    pub fn legacy_indicator(&self) -> LegacyIndicator {
        LegacyIndicator::Modern
    }

    pub fn check_digit(&self) -> u8 {
        self.digits[rules::CHECK_DIGIT]
    }
}

impl fmt::Display for IdNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for d in &self.digits {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl Serialize for IdNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("IdNumber", 6)?;
        state.serialize_field("id_number", &self.to_string())?;
        state.serialize_field("date_of_birth", &self.date_token())?;
        state.serialize_field("sequence", &self.sequence())?;
        state.serialize_field("citizenship", &self.citizenship())?;
        state.serialize_field("legacy_indicator", &self.legacy_indicator().digit())?;
        state.serialize_field("check_digit", &self.check_digit())?;
        state.end()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub issue_type: ValidationIssueType,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationIssueType {
    Length,
    Format,
    Date,
    Sequence,
    Citizenship,
    LegacyIndicator,
    Checksum,
}

/// Per-check outcome for one candidate. Field checks that could not run
/// because the length or digit pre-checks failed are reported as `false`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub id_number: String,
    pub is_valid: bool,
    pub length_valid: bool,
    pub digits_valid: bool,
    pub date_valid: bool,
    pub sequence_valid: bool,
    pub citizenship_valid: bool,
    pub legacy_indicator_valid: bool,
    pub checksum_valid: bool,
    pub issues: Vec<ValidationIssue>,
}
