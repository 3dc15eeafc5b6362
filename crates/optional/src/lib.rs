//! Optional
//!
//! A zero-or-one value container with an explicit Present/Absent state.
//!
//! Constructors split by what the caller knows about the source value:
//! - [`Optional::from_value`] for a value that is always there
//! - [`Optional::from_non_null`] for a value asserted present (fails otherwise)
//! - [`Optional::from_nullable`] for a value that may be missing
//! - [`Optional::empty`] for no value at all
//!
//! # Example
//! ```rust
//! use optional::{Optional, OptionalError};
//!
//! let name = Optional::from_nullable(std::env::var("OPTIONAL_DOC_UNSET").ok());
//! assert_eq!(name.clone().or_else("guest".into()), "guest");
//! assert!(name.value().is_err_and(|e| e == OptionalError::InvalidState("cannot access value when absent")));
//! ```

mod error;
mod optional;
#[cfg(feature = "serde")]
mod serialize;

pub use error::{OptionalError, Result};
pub use optional::Optional;
