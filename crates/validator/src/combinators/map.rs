//! MAP and AND_THEN combinators - post-processing of decoded values

use crate::foundation::{Validate, ValidationResult};
use serde_json::Value;

/// Transforms the output of a successful decode.
#[derive(Debug, Clone, Copy)]
pub struct Map<V, F> {
    inner: V,
    f: F,
}

impl<V, F> Map<V, F> {
    pub fn new(inner: V, f: F) -> Self {
        Self { inner, f }
    }
}

impl<V, F, U> Validate for Map<V, F>
where
    V: Validate,
    F: Fn(V::Output) -> U,
{
    type Output = U;

    fn validate(&self, input: &Value) -> ValidationResult<U> {
        self.inner.validate(input).map(&self.f)
    }

    fn matches(&self, input: &Value) -> bool {
        self.inner.matches(input)
    }

    fn when_absent(&self) -> Option<U> {
        self.inner.when_absent().map(&self.f)
    }
}

/// Runs a fallible refinement after a successful decode.
///
/// # Examples
///
/// ```
/// use pomoshtnik_validator::prelude::*;
/// use serde_json::json;
///
/// let port = unsigned().and_then(|n| {
///     u16::try_from(n).map_err(|_| ValidationError::custom("port out of range"))
/// });
/// assert_eq!(port.validate(&json!(8080)), Ok(8080));
/// assert!(port.validate(&json!(70000)).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AndThen<V, F> {
    inner: V,
    f: F,
}

impl<V, F> AndThen<V, F> {
    pub fn new(inner: V, f: F) -> Self {
        Self { inner, f }
    }
}

impl<V, F, U> Validate for AndThen<V, F>
where
    V: Validate,
    F: Fn(V::Output) -> ValidationResult<U>,
{
    type Output = U;

    fn validate(&self, input: &Value) -> ValidationResult<U> {
        self.inner.validate(input).and_then(&self.f)
    }

    fn when_absent(&self) -> Option<U> {
        self.inner.when_absent().and_then(|v| (self.f)(v).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ValidateExt, ValidationError};
    use crate::validators::{integer, string};
    use serde_json::json;

    #[test]
    fn map_transforms_output() {
        let upper = string().map(|s| s.to_uppercase());
        assert_eq!(upper.validate(&json!("abc")), Ok("ABC".to_owned()));
        assert!(upper.validate(&json!(1)).is_err());
    }

    #[test]
    fn map_keeps_absent_default() {
        let flag = string().optional().map(|s| s.is_some());
        assert_eq!(flag.when_absent(), Some(false));
    }

    #[test]
    fn and_then_can_reject() {
        let positive = integer().and_then(|n| {
            if n > 0 {
                Ok(n)
            } else {
                Err(ValidationError::custom("must be positive"))
            }
        });
        assert_eq!(positive.validate(&json!(3)), Ok(3));
        assert!(positive.validate(&json!(-3)).is_err());
        assert!(!positive.matches(&json!(-3)));
    }
}
