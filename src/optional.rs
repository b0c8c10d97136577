// used to print out readable forms of a wrapped value
use std::fmt;

use crate::error::{OptionalError, Result};

/// Zero or one value of type `T`.
///
/// An `Optional` is built once, through [`Optional::present`],
/// [`Optional::empty`] or [`Optional::from_ref`], and is only read from
/// afterwards. "Setting" a value means constructing a new `Optional`.
///
/// The [`Default`] is the empty Optional, for any `T`. That is what lets a
/// decoder leave a missing struct field empty while a field that was in the
/// input, even with a zero value, comes back present.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Optional<T>(Option<T>);

impl<T> Optional<T> {
    /// Wraps `value`.
    pub const fn present(value: T) -> Self {
        Self(Some(value))
    }

    pub const fn empty() -> Self {
        Self(None)
    }

    /// Copies the referent, if any. The result never aliases the original,
    /// so later changes to it are not observed through the Optional.
    pub fn from_ref(value: Option<&T>) -> Self
    where
        T: Clone,
    {
        match value {
            Some(v) => Self::present(v.clone()),
            None => Self::empty(),
        }
    }

    pub const fn is_present(&self) -> bool {
        self.0.is_some()
    }

    pub const fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// Calls `action` with the wrapped value, once, if there is one.
    pub fn if_present<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Some(v) = &self.0 {
            action(v);
        }
    }

    /// Returns the wrapped value and `true`, or the zero value of `T` and
    /// `false` when empty. Check the flag before trusting the value.
    pub fn get(self) -> (T, bool)
    where
        T: Default,
    {
        match self.0 {
            Some(v) => (v, true),
            None => (T::default(), false),
        }
    }

    /// Returns the wrapped value, or `fallback`. The fallback is evaluated
    /// by the caller either way; use [`Optional::or_else_get`] to defer it.
    pub fn or_else(self, fallback: T) -> T {
        self.0.unwrap_or(fallback)
    }

    /// Returns the wrapped value, or the result of `supplier`. The supplier
    /// runs only when the Optional is empty.
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.0.unwrap_or_else(supplier)
    }

    /// Returns the wrapped value, or the zero value of `T`.
    pub fn or_else_zero(self) -> T
    where
        T: Default,
    {
        self.or_else_get(T::default)
    }

    /// Applies `transform` to a present value. An empty source yields an
    /// empty result and `transform` is not called.
    pub fn map<U, F>(self, transform: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        Optional(self.0.map(transform))
    }

    pub const fn as_ref(&self) -> Optional<&T> {
        Optional(self.0.as_ref())
    }

    pub fn into_option(self) -> Option<T> {
        self.0
    }

    /// Turns absence into [`OptionalError::Absent`], for callers that
    /// would rather propagate with `?` than branch on [`Optional::get`].
    pub fn require(self) -> Result<T> {
        self.0.ok_or_else(OptionalError::absent::<T>)
    }

    /// Returns the wrapped value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` when empty. Calling this on an empty Optional is a
    /// programming error, not something to recover from.
    pub fn expect_present(self, msg: &str) -> T {
        match self.0 {
            Some(v) => v,
            None => panic!("{msg}"),
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
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

// Empty renders as nothing at all, not as the zero value.
impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.0 {
            Some(v) => fmt::Display::fmt(v, f),
            None => Ok(()),
        }
    }
}
