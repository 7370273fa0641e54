//! Core traits for the decoding system
//!
//! This module defines the trait every validator implements, the extension
//! trait that provides the fluent combinator API, and [`Decode`] for types
//! that own a canonical validator.

use crate::foundation::{ValidationError, ValidationResult};
use serde_json::Value;
use std::sync::Arc;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// A validator is a pure function from an untyped JSON value to a typed
/// result. Validators hold no mutable state, so one instance can be shared
/// by any number of threads.
///
/// # Examples
///
/// ```
/// use pomoshtnik_validator::foundation::{Validate, ValidationError, ValidationResult};
/// use serde_json::{Value, json};
///
/// struct Even;
///
/// impl Validate for Even {
///     type Output = i64;
///
///     fn validate(&self, input: &Value) -> ValidationResult<i64> {
///         match input.as_i64() {
///             Some(n) if n % 2 == 0 => Ok(n),
///             _ => Err(ValidationError::custom("expected an even integer")),
///         }
///     }
/// }
///
/// assert_eq!(Even.validate(&json!(4)), Ok(4));
/// assert!(!Even.matches(&json!(3)));
/// ```
pub trait Validate {
    /// The typed value produced on success.
    type Output;

    /// Decodes `input`.
    ///
    /// # Returns
    ///
    /// * `Ok(output)` if the input has the expected shape
    /// * `Err(ValidationError)` describing every problem found otherwise
    fn validate(&self, input: &Value) -> ValidationResult<Self::Output>;

    /// Type predicate: answers whether `input` has the expected shape
    /// without building diagnostics.
    fn matches(&self, input: &Value) -> bool {
        self.validate(input).is_ok()
    }

    /// The value to use when a record field is absent.
    ///
    /// `None` means the field is required. Optional combinators return
    /// `Some(None)`-like outputs here.
    fn when_absent(&self) -> Option<Self::Output> {
        None
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Output = V::Output;

    fn validate(&self, input: &Value) -> ValidationResult<Self::Output> {
        (**self).validate(input)
    }

    fn matches(&self, input: &Value) -> bool {
        (**self).matches(input)
    }

    fn when_absent(&self) -> Option<Self::Output> {
        (**self).when_absent()
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Output = V::Output;

    fn validate(&self, input: &Value) -> ValidationResult<Self::Output> {
        (**self).validate(input)
    }

    fn matches(&self, input: &Value) -> bool {
        (**self).matches(input)
    }

    fn when_absent(&self) -> Option<Self::Output> {
        (**self).when_absent()
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    type Output = V::Output;

    fn validate(&self, input: &Value) -> ValidationResult<Self::Output> {
        (**self).validate(input)
    }

    fn matches(&self, input: &Value) -> bool {
        (**self).matches(input)
    }

    fn when_absent(&self) -> Option<Self::Output> {
        (**self).when_absent()
    }
}

/// A type-erased validator that can be shared across threads.
pub type BoxValidator<T> = Box<dyn Validate<Output = T> + Send + Sync>;

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```
/// use pomoshtnik_validator::prelude::*;
/// use serde_json::json;
///
/// let lengths = string().map(|s| s.len()).array();
/// assert_eq!(lengths.validate(&json!(["ab", "cde"])), Ok(vec![2, 3]));
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Transforms the successful output.
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, f)
    }

    /// Runs a fallible step on the successful output.
    fn and_then<F, U>(self, f: F) -> AndThen<Self, F>
    where
        F: Fn(Self::Output) -> ValidationResult<U>,
    {
        AndThen::new(self, f)
    }

    /// Tries `other` when this validator fails.
    ///
    /// Short-circuits on the first success. If both fail, the error holds
    /// both failures.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Output = Self::Output>,
    {
        Or::new(self, other)
    }

    /// Accepts an absent field or `null` as `None`.
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Accepts `null` as `None`; an absent field is still an error.
    fn nullable(self) -> Nullable<Self> {
        Nullable::new(self)
    }

    /// Validates every element of an array with this validator.
    fn array(self) -> ArrayOf<Self> {
        ArrayOf::new(self)
    }

    /// Erases the concrete validator type.
    fn boxed(self) -> BoxValidator<Self::Output>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// DECODE TRAIT
// ============================================================================

/// Types that know how to decode themselves from untyped JSON.
///
/// Implementing `Decode` gives a type one canonical validator
/// ([`decoder`](crate::combinators::decoder)) and one predicate
/// ([`Decode::is`]).
pub trait Decode: Sized {
    /// Decodes `input` into `Self`.
    fn decode(input: &Value) -> ValidationResult<Self>;

    /// Type predicate for `Self`.
    fn is(input: &Value) -> bool {
        Self::decode(input).is_ok()
    }

    /// The value to use when a record field of this type is absent.
    fn when_absent() -> Option<Self> {
        None
    }
}

// ============================================================================
// IMPORT COMBINATOR TYPES
// ============================================================================

pub use crate::combinators::array::ArrayOf;
pub use crate::combinators::map::{AndThen, Map};
pub use crate::combinators::optional::{Nullable, Optional};
pub use crate::combinators::or::Or;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Output = ();

        fn validate(&self, _input: &Value) -> ValidationResult<()> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Output = ();

        fn validate(&self, _input: &Value) -> ValidationResult<()> {
            Err(ValidationError::custom("always fails"))
        }
    }

    #[test]
    fn test_validator_trait() {
        assert!(AlwaysValid.validate(&json!(null)).is_ok());
        assert!(AlwaysValid.matches(&json!(1)));
        assert!(!AlwaysFails.matches(&json!(1)));
        assert!(AlwaysValid.when_absent().is_none());
    }

    #[test]
    fn references_and_boxes_delegate() {
        let by_ref = &AlwaysFails;
        assert!(by_ref.validate(&json!(1)).is_err());

        let boxed: BoxValidator<()> = AlwaysValid.boxed();
        assert!(boxed.validate(&json!(1)).is_ok());

        let shared = Arc::new(AlwaysValid);
        assert!(shared.matches(&json!(1)));
    }
}
