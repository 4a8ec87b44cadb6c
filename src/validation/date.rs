use super::digits::DigitsValidator;
use crate::utils::IdError;
use chrono::NaiveDate;
use log::debug;

// The two-digit year is resolved inside 2000-2099 purely to pick a calendar.
// 2000 is a leap year, so this matches a plain divisible-by-4 test on YY.
const CALENDAR_BASE_YEAR: i32 = 2000;

pub struct DateValidator;

impl DateValidator {
    /// Strictly parses a `YYMMDD` token. Out-of-range months and days are
    /// rejected rather than rolled over.
    pub fn validate(token: &str) -> Result<NaiveDate, IdError> {
        if token.len() != 6 {
            debug!("Rejected date token {:?}: expected 6 digits", token);
            return Err(IdError::InvalidDate(format!(
                "expected 6 digits, got {:?}",
                token
            )));
        }
        let digits = DigitsValidator::to_digits(token)
            .map_err(|_| IdError::InvalidDate(format!("non-numeric date {:?}", token)))?;

        let pair = |i: usize| u32::from(digits[i]) * 10 + u32::from(digits[i + 1]);
        let (year, month, day) = (pair(0), pair(2), pair(4));

        NaiveDate::from_ymd_opt(CALENDAR_BASE_YEAR + year as i32, month, day).ok_or_else(|| {
            debug!("Rejected date token {}: no such calendar day", token);
            IdError::InvalidDate(format!(
                "{:02}-{:02}-{:02} is not a calendar date",
                year, month, day
            ))
        })
    }
}

pub fn is_valid_date(token: &str) -> bool {
    DateValidator::validate(token).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_dates() {
        assert!(is_valid_date("241212"));
        assert!(is_valid_date("041103"));
        assert!(is_valid_date("990131"));
        assert!(is_valid_date("000101"));
    }

    #[test]
    fn test_leap_years() {
        assert!(is_valid_date("240229"));
        assert!(!is_valid_date("250229"));
        assert!(is_valid_date("000229"));
        assert!(is_valid_date("960229"));
        assert!(!is_valid_date("990229"));
        assert!(!is_valid_date("240230"));
    }

    #[test]
    fn test_invalid_month() {
        assert!(!is_valid_date("241332"));
        assert!(!is_valid_date("241301"));
        assert!(!is_valid_date("240001"));
    }

    #[test]
    fn test_invalid_day() {
        assert!(!is_valid_date("241140"));
        assert!(!is_valid_date("241100"));
        assert!(!is_valid_date("240431"));
        assert!(!is_valid_date("240132"));
        assert!(is_valid_date("240131"));
    }

    #[test]
    fn test_malformed_tokens() {
        assert!(!is_valid_date(""));
        assert!(!is_valid_date("24011"));
        assert!(!is_valid_date("2401011"));
        assert!(!is_valid_date("24o101"));
        assert!(!is_valid_date("24-1-1"));
        // Six bytes but not six ASCII digits
        assert!(!is_valid_date("２410"));
    }

    #[test]
    fn test_parsed_date() {
        let date = DateValidator::validate("041103").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2004, 11, 3).unwrap());
    }
}
