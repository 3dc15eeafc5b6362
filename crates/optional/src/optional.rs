//! Optional value container
//!
//! An `Optional<T>` is either Present (holding exactly one payload) or
//! Absent. Instances never change state: every combinator either hands the
//! receiver back or builds a fresh instance.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ptr::NonNull;

use crate::error::{OptionalError, Result};

/// Zero-or-one value container.
///
/// # Example
/// ```rust
/// use optional::Optional;
///
/// let port = Optional::from_nullable(Some(8080));
/// assert!(port.has_value());
/// assert_eq!(port.map(|p| p + 1).or_else(0), 8081);
///
/// let missing = Optional::<u16>::empty();
/// assert!(missing.value().is_err());
/// assert_eq!(missing.to_string(), "Empty");
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct Optional<T>(Option<T>);

impl<T> Optional<T> {
    /// Wrap a value unconditionally as present.
    #[inline]
    pub const fn from_value(value: T) -> Self {
        Self(Some(value))
    }

    /// Wrap a value the caller asserts is present.
    ///
    /// Fails with [`OptionalError::InvalidArgument`] on `None`.
    pub fn from_non_null(value: Option<T>) -> Result<Self> {
        match value {
            Some(value) => Ok(Self(Some(value))),
            None => {
                tracing::debug!(
                    "Rejected null {} in strict constructor",
                    std::any::type_name::<T>()
                );
                Err(OptionalError::NULL_VALUE)
            }
        }
    }

    /// Wrap a value that may be missing; `None` gives an absent optional.
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        Self(value)
    }

    /// Absent optional.
    #[inline]
    pub const fn empty() -> Self {
        Self(None)
    }

    /// Check if a payload is present
    #[inline]
    pub const fn has_value(&self) -> bool {
        self.0.is_some()
    }

    /// Check if the optional is absent
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Borrow the payload.
    ///
    /// Fails with [`OptionalError::InvalidState`] when absent.
    pub fn value(&self) -> Result<&T> {
        match &self.0 {
            Some(value) => Ok(value),
            None => Err(absent_access::<T>()),
        }
    }

    /// Take the payload by value. Same contract as [`Optional::value`].
    pub fn into_value(self) -> Result<T> {
        match self.0 {
            Some(value) => Ok(value),
            None => Err(absent_access::<T>()),
        }
    }

    /// Borrowing view of this optional
    #[inline]
    pub fn as_ref(&self) -> Optional<&T> {
        Optional(self.0.as_ref())
    }

    /// Convert back into a native `Option`
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.0
    }

    /// Payload if present, else `fallback`.
    #[inline]
    pub fn or_else(self, fallback: T) -> T {
        self.0.unwrap_or(fallback)
    }

    /// Payload if present, else the result of `factory`.
    ///
    /// `factory` runs at most once and only when absent.
    #[inline]
    pub fn or_else_compute<F>(self, factory: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.0 {
            Some(value) => value,
            None => factory(),
        }
    }

    /// Payload if present, else `E::default()` as the error.
    #[inline]
    pub fn or_else_fail<E>(self) -> std::result::Result<T, E>
    where
        E: Default,
    {
        self.or_else_fail_with(E::default)
    }

    /// Payload if present, else the error built by `make_err`.
    pub fn or_else_fail_with<E, F>(self, make_err: F) -> std::result::Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self.0 {
            Some(value) => Ok(value),
            None => {
                tracing::debug!(
                    "Absent {} replaced by {}",
                    std::any::type_name::<T>(),
                    std::any::type_name::<E>()
                );
                Err(make_err())
            }
        }
    }

    /// Run `action` on the payload if present.
    #[inline]
    pub fn if_present<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.0 {
            action(value);
        }
    }

    /// Keep the payload only if `predicate` holds.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self.0 {
            Some(value) if predicate(&value) => Self(Some(value)),
            _ => Self(None),
        }
    }

    /// Transform the payload, keeping absence.
    #[inline]
    pub fn map<U, F>(self, transform: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        Optional(self.0.map(transform))
    }

    /// Transform the payload with a function that may produce nothing.
    ///
    /// A `None` result collapses to absent; the container never claims
    /// presence without a payload.
    #[inline]
    pub fn map_nullable<U, F>(self, transform: F) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        Optional(self.0.and_then(transform))
    }

    /// Chain another optional-producing step.
    #[inline]
    pub fn and_then<U, F>(self, transform: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self.0 {
            Some(value) => transform(value),
            None => Optional(None),
        }
    }

    /// Hash with the std hasher. Absent is always `0`.
    pub fn hash_code(&self) -> u64
    where
        T: Hash,
    {
        match &self.0 {
            Some(value) => {
                let mut hasher = DefaultHasher::new();
                value.hash(&mut hasher);
                hasher.finish()
            }
            None => 0,
        }
    }
}

impl<T> Optional<NonNull<T>> {
    /// Wrap a raw pointer the caller asserts is non-null.
    ///
    /// The pointer is only stored, never dereferenced.
    pub fn from_non_null_ptr(ptr: *const T) -> Result<Self> {
        Optional::from_non_null(NonNull::new(ptr.cast_mut()))
    }
}

fn absent_access<T>() -> OptionalError {
    tracing::debug!("Read of absent {}", std::any::type_name::<T>());
    OptionalError::ABSENT
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.0
    }
}

impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.0 {
            Some(value) => value.hash(state),
            None => 0u8.hash(state),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str("Empty"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => f.debug_tuple("Present").field(value).finish(),
            None => f.write_str("Empty"),
        }
    }
}
