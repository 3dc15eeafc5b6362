//! Optional errors

/// Result alias for fallible `Optional` operations
pub type Result<T> = std::result::Result<T, OptionalError>;

/// Failure raised by strict constructors and payload accessors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionalError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("Invalid state: {0}")]
    InvalidState(&'static str),
}

impl OptionalError {
    /// Strict constructor received an absent value
    pub(crate) const NULL_VALUE: OptionalError =
        OptionalError::InvalidArgument("value must not be null");

    /// Payload read on an absent optional
    pub(crate) const ABSENT: OptionalError =
        OptionalError::InvalidState("cannot access value when absent");

    /// Check if this is an invalid argument failure
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, OptionalError::InvalidArgument(_))
    }

    /// Check if this is an invalid state failure
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, OptionalError::InvalidState(_))
    }
}
