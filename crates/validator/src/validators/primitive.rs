//! Primitive validators - one per JSON scalar kind
//!
//! No validator coerces: the string `"5"` is not a number and `0` is not a
//! boolean.

use crate::foundation::{Validate, ValidationResult};
use serde_json::Value;

crate::validator! {
    /// Accepts JSON strings.
    pub Str => String;
    expect "string";
    decode(input) { input.as_str().map(str::to_owned) }
    fn string();
    predicate is_string;
}

crate::validator! {
    /// Accepts any JSON number as `f64`.
    pub Number => f64;
    expect "number";
    decode(input) { input.as_f64() }
    fn number();
    predicate is_number;
}

crate::validator! {
    /// Accepts JSON numbers that are integers representable as `i64`.
    pub Integer => i64;
    expect "integer";
    decode(input) { input.as_i64() }
    fn integer();
    predicate is_integer;
}

crate::validator! {
    /// Accepts JSON numbers that are non-negative integers.
    pub Unsigned => u64;
    expect "non-negative integer";
    decode(input) { input.as_u64() }
    fn unsigned();
    predicate is_unsigned;
}

crate::validator! {
    /// Accepts `true` and `false`.
    pub Boolean => bool;
    expect "boolean";
    decode(input) { input.as_bool() }
    fn boolean();
    predicate is_boolean;
}

crate::validator! {
    /// Accepts only `null`.
    pub Null => ();
    expect "null";
    decode(input) { input.as_null() }
    fn null();
    predicate is_null;
}

/// Accepts any value unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Any;

impl Validate for Any {
    type Output = Value;

    fn validate(&self, input: &Value) -> ValidationResult<Value> {
        Ok(input.clone())
    }

    fn matches(&self, _input: &Value) -> bool {
        true
    }
}

#[must_use]
pub const fn any() -> Any {
    Any
}
