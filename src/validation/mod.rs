pub mod checksum;
pub mod citizenship;
pub mod date;
pub mod digits;
pub mod legacy;
pub mod sequence;

pub use checksum::{is_valid_checksum, ChecksumValidator};
pub use citizenship::{is_valid_citizenship, CitizenshipValidator};
pub use date::{is_valid_date, DateValidator};
pub use digits::{is_digits_only, DigitsValidator};
pub use legacy::LegacyIndicatorValidator;
pub use sequence::{is_valid_sequence, SequenceValidator};
