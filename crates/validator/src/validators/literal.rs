//! LITERAL validators - exact constants and closed value sets

use crate::combinators::Tag;
use crate::foundation::{Validate, ValidationError, ValidationResult};
use serde_json::Value;
use std::marker::PhantomData;

/// Accepts exactly one value.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    expected: Value,
}

impl Constant {
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    pub fn expected(&self) -> &Value {
        &self.expected
    }
}

impl Validate for Constant {
    type Output = ();

    fn validate(&self, input: &Value) -> ValidationResult<()> {
        if *input == self.expected {
            Ok(())
        } else {
            Err(ValidationError::invalid_literal(
                input,
                std::slice::from_ref(&self.expected),
            ))
        }
    }

    fn matches(&self, input: &Value) -> bool {
        *input == self.expected
    }
}

/// Accepts any value from a fixed list and returns the matched value.
#[derive(Debug, Clone, PartialEq)]
pub struct OneOfLiterals {
    allowed: Vec<Value>,
}

impl OneOfLiterals {
    pub fn new<I, T>(allowed: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    pub fn allowed(&self) -> &[Value] {
        &self.allowed
    }
}

impl Validate for OneOfLiterals {
    type Output = Value;

    fn validate(&self, input: &Value) -> ValidationResult<Value> {
        if self.allowed.contains(input) {
            Ok(input.clone())
        } else {
            Err(ValidationError::invalid_literal(input, &self.allowed))
        }
    }

    fn matches(&self, input: &Value) -> bool {
        self.allowed.contains(input)
    }
}

/// Accepts the wire spelling of any tag in `E`, producing the tag.
///
/// # Examples
///
/// ```
/// use pomoshtnik_validator::prelude::*;
/// use serde_json::json;
///
/// pomoshtnik_validator::tags! {
///     pub enum Size {
///         Small = "w92",
///         Original = "original",
///     }
/// }
///
/// assert_eq!(literal::<Size>().validate(&json!("w92")), Ok(Size::Small));
/// let error = literal::<Size>().validate(&json!("w93")).unwrap_err();
/// assert_eq!(error.param("allowed"), Some(r#""w92", "original""#));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal<E> {
    _tag: PhantomData<fn() -> E>,
}

impl<E: Tag> Literal<E> {
    pub fn new() -> Self {
        Self { _tag: PhantomData }
    }

    fn allowed() -> Vec<Value> {
        E::ALL.iter().map(|tag| Value::from(tag.as_str())).collect()
    }
}

impl<E: Tag> Default for Literal<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Tag> Validate for Literal<E> {
    type Output = E;

    fn validate(&self, input: &Value) -> ValidationResult<E> {
        input
            .as_str()
            .and_then(E::parse)
            .ok_or_else(|| ValidationError::invalid_literal(input, &Self::allowed()))
    }

    fn matches(&self, input: &Value) -> bool {
        input.as_str().and_then(E::parse).is_some()
    }
}

/// Creates a validator for exactly `expected`.
pub fn constant(expected: impl Into<Value>) -> Constant {
    Constant::new(expected)
}

/// Creates a validator for any of `allowed`.
pub fn one_of_literals<I, T>(allowed: I) -> OneOfLiterals
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    OneOfLiterals::new(allowed)
}

/// Creates a validator for the tag set `E`.
pub fn literal<E: Tag>() -> Literal<E> {
    Literal::new()
}
