//! ARRAY combinator - decodes every element of a JSON array

use crate::foundation::{PathSegment, Validate, ValidationError, ValidationResult, codes};
use serde_json::Value;

// ============================================================================
// ARRAY COMBINATOR
// ============================================================================

/// Decodes each element of an array with one validator.
///
/// By default every element is checked and all failures are reported, each
/// located at its index. The empty array is always valid.
///
/// # Examples
///
/// ```
/// use pomoshtnik_validator::prelude::*;
/// use serde_json::json;
///
/// let ids = integer().array();
/// assert_eq!(ids.validate(&json!([1, 2])), Ok(vec![1, 2]));
///
/// let error = ids.validate(&json!([1, "two", 3, null])).unwrap_err();
/// let locations: Vec<String> = error.entries().into_iter().map(|(at, _)| at).collect();
/// assert_eq!(locations, ["[1]", "[3]"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ArrayOf<V> {
    inner: V,
    fail_fast: bool,
}

impl<V> ArrayOf<V> {
    /// Creates an array decoder that collects every element failure.
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            fail_fast: false,
        }
    }

    /// Creates an array decoder that stops at the first element failure.
    pub fn fail_fast(inner: V) -> Self {
        Self {
            inner,
            fail_fast: true,
        }
    }

    /// Sets whether to stop on the first error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Returns a reference to the element validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V: Validate> Validate for ArrayOf<V> {
    type Output = Vec<V::Output>;

    fn validate(&self, input: &Value) -> ValidationResult<Self::Output> {
        let Value::Array(elements) = input else {
            return Err(ValidationError::type_mismatch("array", input));
        };

        let mut outputs = Vec::with_capacity(elements.len());
        let mut errors: Vec<(usize, ValidationError)> = Vec::new();

        for (index, element) in elements.iter().enumerate() {
            match self.inner.validate(element) {
                Ok(output) => outputs.push(output),
                Err(e) => {
                    errors.push((index, e));
                    if self.fail_fast {
                        break;
                    }
                }
            }
        }

        if errors.is_empty() {
            return Ok(outputs);
        }

        let indices: Vec<String> = errors.iter().map(|(i, _)| i.to_string()).collect();
        let error = ValidationError::new(
            codes::INVALID_ELEMENTS,
            format!(
                "{} of {} elements failed validation",
                errors.len(),
                elements.len()
            ),
        )
        .with_param("failed_count", errors.len().to_string())
        .with_param("total_count", elements.len().to_string())
        .with_param("failed_indices", indices.join(","))
        .with_nested(
            errors
                .into_iter()
                .map(|(i, e)| e.at(PathSegment::Index(i)))
                .collect(),
        );

        Err(error)
    }

    fn matches(&self, input: &Value) -> bool {
        input
            .as_array()
            .is_some_and(|elements| elements.iter().all(|e| self.inner.matches(e)))
    }
}

/// Creates an array decoder that checks every element.
pub fn array<V>(validator: V) -> ArrayOf<V> {
    ArrayOf::new(validator)
}

// ============================================================================
// TESTS
// ============================================================================
