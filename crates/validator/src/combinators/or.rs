//! OR and ONE_OF combinators - untagged unions
//!
//! Alternatives are tried in order and the first success wins. When every
//! alternative fails, the error is a `no_match` holding each alternative's
//! failure, so callers can see why each branch rejected the input.
//!
//! # Examples
//!
//! ```
//! use pomoshtnik_validator::prelude::*;
//! use serde_json::json;
//!
//! let id = integer().map(|n| n.to_string()).or(string());
//! assert_eq!(id.validate(&json!(42)), Ok("42".to_owned()));
//! assert_eq!(id.validate(&json!("42")), Ok("42".to_owned()));
//!
//! let error = id.validate(&json!(true)).unwrap_err();
//! assert_eq!(error.code, codes::NO_MATCH);
//! assert_eq!(error.nested.len(), 2);
//! ```

use crate::foundation::{BoxValidator, Validate, ValidationError, ValidationResult, codes};
use serde_json::Value;

/// Tries `left`, then `right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Output = L::Output>,
{
    type Output = L::Output;

    fn validate(&self, input: &Value) -> ValidationResult<Self::Output> {
        match self.left.validate(input) {
            Ok(output) => Ok(output),
            Err(left_error) => match self.right.validate(input) {
                Ok(output) => Ok(output),
                Err(right_error) => {
                    let mut alternatives = unwrap_alternatives(left_error);
                    alternatives.extend(unwrap_alternatives(right_error));
                    Err(ValidationError::no_match(alternatives))
                }
            },
        }
    }

    fn matches(&self, input: &Value) -> bool {
        self.left.matches(input) || self.right.matches(input)
    }

    fn when_absent(&self) -> Option<Self::Output> {
        self.left.when_absent().or_else(|| self.right.when_absent())
    }
}

/// Nested unions fold into one flat list of alternatives.
fn unwrap_alternatives(error: ValidationError) -> Vec<ValidationError> {
    if error.code == codes::NO_MATCH && error.path.is_root() {
        error.nested
    } else {
        vec![error]
    }
}

/// Tries a runtime list of alternatives of the same output type.
pub struct OneOf<T> {
    alternatives: Vec<BoxValidator<T>>,
}

impl<T> OneOf<T> {
    pub fn new(alternatives: Vec<BoxValidator<T>>) -> Self {
        Self { alternatives }
    }

    /// Number of alternatives.
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}

impl<T> std::fmt::Debug for OneOf<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OneOf")
            .field("alternatives", &self.alternatives.len())
            .finish()
    }
}

impl<T> Validate for OneOf<T> {
    type Output = T;

    fn validate(&self, input: &Value) -> ValidationResult<T> {
        let mut failures = Vec::with_capacity(self.alternatives.len());
        for alternative in &self.alternatives {
            match alternative.validate(input) {
                Ok(output) => return Ok(output),
                Err(e) => failures.push(e),
            }
        }
        Err(ValidationError::no_match(failures))
    }

    fn matches(&self, input: &Value) -> bool {
        self.alternatives.iter().any(|a| a.matches(input))
    }
}

/// Creates a one-of validator. An empty list rejects everything.
pub fn one_of<T>(alternatives: Vec<BoxValidator<T>>) -> OneOf<T> {
    OneOf::new(alternatives)
}

pub fn or<L, R>(left: L, right: R) -> Or<L, R> {
    Or::new(left, right)
}
