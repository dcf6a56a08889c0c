//! A value that may or may not be present.
//!
//! Presence is recorded by the variant, not by inspecting the value, so
//! `Optional::of(0)` and `Optional::of(String::new())` both hold a value.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Zero-or-one value of type `T`. Empty by default.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Optional<T> {
    value: Option<T>,
}

impl<T> Optional<T> {
    /// Create an optional from an argument that may have been omitted.
    pub fn new(value: Option<T>) -> Self {
        Self { value }
    }

    /// Create an optional holding nothing.
    pub fn empty() -> Self {
        Self { value: None }
    }

    /// Create an optional holding `value`.
    pub fn of(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Whether a value is present.
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Borrow the value, failing with [`Error::EmptyValue`] when unset.
    pub fn get(&self) -> Result<&T> {
        self.value.as_ref().ok_or(Error::EmptyValue)
    }

    /// Borrow the value, or `None` when unset.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Borrow the value, or `default` when unset.
    pub fn get_or<'a>(&'a self, default: &'a T) -> &'a T {
        self.value.as_ref().unwrap_or(default)
    }

    /// Replace the held value, returning the previous one.
    pub fn set(&mut self, value: T) -> Option<T> {
        self.value.replace(value)
    }

    /// Remove and return the value, leaving the optional empty.
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Unwrap into a plain `Option`.
    pub fn into_inner(self) -> Option<T> {
        self.value
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::new(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.value
    }
}

/// Object form: `{ value: null }` or `{ value: <v> }`.
impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "{{ value: {v} }}"),
            None => f.write_str("{ value: null }"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_argument_is_empty() {
        let opt: Optional<i32> = Optional::new(None);
        assert!(!opt.has_value());
        assert!(matches!(opt.get(), Err(Error::EmptyValue)));
        assert_eq!(opt.value(), None);
        assert_eq!(opt, Optional::default());
    }

    #[test]
    fn falsy_values_are_present() {
        let zero = Optional::of(0);
        assert!(zero.has_value());
        assert_eq!(*zero.get().unwrap(), 0);

        let blank = Optional::of(String::new());
        assert!(blank.has_value());
        assert_eq!(blank.get().unwrap(), "");
    }

    #[test]
    fn set_and_take() {
        let mut opt = Optional::empty();
        assert_eq!(opt.set(1), None);
        assert_eq!(opt.set(2), Some(1));
        assert_eq!(opt.take(), Some(2));
        assert!(!opt.has_value());
        assert_eq!(*opt.get_or(&7), 7);
    }

    #[test]
    fn displays_in_object_form() {
        assert_eq!(Optional::<i32>::empty().to_string(), "{ value: null }");
        assert_eq!(Optional::of(1).to_string(), "{ value: 1 }");
    }

    #[test]
    fn serializes_value_field() {
        assert_eq!(
            serde_json::to_string(&Optional::<i32>::empty()).unwrap(),
            r#"{"value":null}"#
        );
        assert_eq!(
            serde_json::to_string(&Optional::of("")).unwrap(),
            r#"{"value":""}"#
        );
    }

    #[test]
    fn converts_from_and_into_option() {
        let opt: Optional<u8> = Some(3).into();
        let back: Option<u8> = opt.into();
        assert_eq!(back, Some(3));
    }
}
