use serde::Serialize;
use std::ops::Range;

/// Total number of digits in an ID number.
pub const ID_LENGTH: usize = 13;

// Field positions within the 13 digits
pub const DATE_OF_BIRTH: Range<usize> = 0..6;
pub const SEQUENCE: Range<usize> = 6..10;
pub const CITIZENSHIP: usize = 10;
pub const LEGACY_INDICATOR: usize = 11;
pub const CHECK_DIGIT: usize = 12;

/// Largest value the 4-digit sequence field can hold.
pub const MAX_SEQUENCE: u16 = 9999;

/// Citizenship flag at position 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Citizenship {
    Citizen = 0,
    PermanentResident = 1,
}

impl Citizenship {
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Citizenship::Citizen),
            1 => Some(Citizenship::PermanentResident),
            _ => None,
        }
    }

    pub fn digit(self) -> u8 {
        self as u8
    }
}

/// Digit at position 11.
///
/// This used to carry a race classification and took several values. The
/// current issuing standard fixes it to 8, so only that variant remains. If
/// the standard changes again, add the new variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LegacyIndicator {
    Modern = 8,
}

impl LegacyIndicator {
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            8 => Some(LegacyIndicator::Modern),
            _ => None,
        }
    }

    pub fn digit(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_layout_covers_all_digits() {
        assert_eq!(DATE_OF_BIRTH.end, SEQUENCE.start);
        assert_eq!(SEQUENCE.end, CITIZENSHIP);
        assert_eq!(CHECK_DIGIT + 1, ID_LENGTH);
    }

    #[test]
    fn test_citizenship_digits() {
        assert_eq!(Citizenship::from_digit(0), Some(Citizenship::Citizen));
        assert_eq!(Citizenship::from_digit(1), Some(Citizenship::PermanentResident));
        assert_eq!(Citizenship::from_digit(2), None);
        assert_eq!(Citizenship::from_digit(9), None);
        assert_eq!(Citizenship::PermanentResident.digit(), 1);
    }

    #[test]
    fn test_legacy_indicator_only_accepts_eight() {
        assert_eq!(LegacyIndicator::from_digit(8), Some(LegacyIndicator::Modern));
        for digit in (0..=9).filter(|d| *d != 8) {
            assert_eq!(LegacyIndicator::from_digit(digit), None);
        }
        assert_eq!(LegacyIndicator::Modern.digit(), 8);
    }
}
