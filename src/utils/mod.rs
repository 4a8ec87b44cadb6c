pub mod error;

pub use error::IdError;
