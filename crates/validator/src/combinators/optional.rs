//! OPTIONAL and NULLABLE combinators - fields that may hold nothing
//!
//! - [`Optional`] accepts an absent field or `null` as `None`.
//! - [`Nullable`] accepts `null` as `None` but still requires the field.

use crate::foundation::{Validate, ValidationResult};
use serde_json::Value;

/// Accepts an absent field or `null`, otherwise delegates to the inner
/// validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<V> {
    pub(crate) inner: V,
}

impl<V> Optional<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Validate> Validate for Optional<V> {
    type Output = Option<V::Output>;

    fn validate(&self, input: &Value) -> ValidationResult<Self::Output> {
        match input {
            Value::Null => Ok(None),
            value => self.inner.validate(value).map(Some),
        }
    }

    fn matches(&self, input: &Value) -> bool {
        input.is_null() || self.inner.matches(input)
    }

    fn when_absent(&self) -> Option<Self::Output> {
        Some(None)
    }
}

/// Accepts `null` as `None`. Unlike [`Optional`], an absent field is
/// reported as `required`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nullable<V> {
    pub(crate) inner: V,
}

impl<V> Nullable<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V: Validate> Validate for Nullable<V> {
    type Output = Option<V::Output>;

    fn validate(&self, input: &Value) -> ValidationResult<Self::Output> {
        match input {
            Value::Null => Ok(None),
            value => self.inner.validate(value).map(Some),
        }
    }

    fn matches(&self, input: &Value) -> bool {
        input.is_null() || self.inner.matches(input)
    }
}

pub fn optional<V>(validator: V) -> Optional<V> {
    Optional::new(validator)
}

pub fn nullable<V>(validator: V) -> Nullable<V> {
    Nullable::new(validator)
}
