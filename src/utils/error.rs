use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("ID number must be 13 characters, got {0}")]
    InvalidLength(usize),
    #[error("Non-digit character {found:?} at position {position}")]
    NonDigit { position: usize, found: char },
    #[error("Invalid date of birth: {0}")]
    InvalidDate(String),
    #[error("Invalid sequence number: {0}")]
    InvalidSequence(String),
    #[error("Invalid citizenship digit: {0}")]
    InvalidCitizenship(u8),
    #[error("Invalid legacy indicator digit: {0}")]
    InvalidLegacyIndicator(u8),
    #[error("Checksum mismatch: expected {expected}, found {found}")]
    ChecksumMismatch { expected: u8, found: u8 },
}
