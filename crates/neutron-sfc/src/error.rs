//! SFC validation errors

use thiserror::Error;

/// Hard validation failure for SFC parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SfcError {
    #[error("{option} contains an empty driver name.")]
    EmptyDriverName { option: &'static str },
    #[error("{option} value {value:?} contains control characters.")]
    InvalidCharacters { option: &'static str, value: String },
}

pub type SfcResult<T> = Result<T, SfcError>;
