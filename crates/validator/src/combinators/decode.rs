//! Bridges between the [`Decode`] trait and validator values
//!
//! - [`decoder`] turns a `Decode` type into a validator, so schema types
//!   compose with combinators: `decoder::<Genre>().array()`.
//! - [`from_fn`] turns a closure into a validator. Schema types use it to
//!   build record decoders and generic decoders parameterized by an inner
//!   validator.

use crate::foundation::{Decode, Validate, ValidateExt, ValidationResult};
use crate::validators::{any, boolean, integer, number, string, unsigned};
use serde_json::Value;
use std::marker::PhantomData;

// ============================================================================
// DECODER
// ============================================================================

/// The canonical validator of a [`Decode`] type.
pub struct Decoder<T> {
    _target: PhantomData<fn() -> T>,
}

impl<T> Decoder<T> {
    pub fn new() -> Self {
        Self {
            _target: PhantomData,
        }
    }
}

impl<T> Default for Decoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Decoder<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Decoder<T> {}

impl<T> std::fmt::Debug for Decoder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Decoder<{}>", std::any::type_name::<T>())
    }
}

impl<T: Decode> Validate for Decoder<T> {
    type Output = T;

    fn validate(&self, input: &Value) -> ValidationResult<T> {
        T::decode(input)
    }

    fn matches(&self, input: &Value) -> bool {
        T::is(input)
    }

    fn when_absent(&self) -> Option<T> {
        T::when_absent()
    }
}

/// Creates the canonical validator of `T`.
#[must_use]
pub fn decoder<T: Decode>() -> Decoder<T> {
    Decoder::new()
}

// ============================================================================
// FROM_FN
// ============================================================================

/// A validator backed by a closure.
///
/// # Examples
///
/// ```
/// use pomoshtnik_validator::prelude::*;
/// use serde_json::json;
///
/// let even = from_fn(|input| {
///     let n = integer().validate(input)?;
///     if n % 2 == 0 { Ok(n) } else { Err(ValidationError::custom("odd")) }
/// });
/// assert_eq!(even.validate(&json!(4)), Ok(4));
/// assert!(!even.matches(&json!(5)));
/// ```
#[derive(Clone, Copy)]
pub struct FromFn<F> {
    decode_fn: F,
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FromFn")
    }
}

impl<F, T> Validate for FromFn<F>
where
    F: Fn(&Value) -> ValidationResult<T>,
{
    type Output = T;

    fn validate(&self, input: &Value) -> ValidationResult<T> {
        (self.decode_fn)(input)
    }
}

/// Creates a validator from a decoding closure.
pub fn from_fn<F, T>(decode_fn: F) -> FromFn<F>
where
    F: Fn(&Value) -> ValidationResult<T>,
{
    FromFn { decode_fn }
}

// ============================================================================
// DECODE FOR STANDARD TYPES
// ============================================================================

macro_rules! decode_with {
    ($($ty:ty => $validator:expr),+ $(,)?) => {
        $(
            impl Decode for $ty {
                fn decode(input: &Value) -> ValidationResult<Self> {
                    $validator.validate(input)
                }

                fn is(input: &Value) -> bool {
                    $validator.matches(input)
                }
            }
        )+
    };
}

decode_with! {
    String => string(),
    bool => boolean(),
    f64 => number(),
    i64 => integer(),
    u64 => unsigned(),
    Value => any(),
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(input: &Value) -> ValidationResult<Self> {
        decoder::<T>().array().validate(input)
    }

    fn is(input: &Value) -> bool {
        decoder::<T>().array().matches(input)
    }
}

impl<T: Decode> Decode for Option<T> {
    fn decode(input: &Value) -> ValidationResult<Self> {
        decoder::<T>().optional().validate(input)
    }

    fn is(input: &Value) -> bool {
        decoder::<T>().optional().matches(input)
    }

    fn when_absent() -> Option<Self> {
        Some(None)
    }
}
