//! Runtime kinds of untyped JSON values
//!
//! Kind-mismatch errors name the kind a validator expected and the kind it
//! found, plus a short preview of the offending value.

use serde_json::Value;
use std::fmt;

/// Longest preview (in characters) rendered into an error message.
pub const PREVIEW_LIMIT: usize = 40;

/// The runtime kind of a [`serde_json::Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Classifies `value`.
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Lower-case name used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders `value` as compact JSON, cut to [`PREVIEW_LIMIT`] characters.
#[must_use]
pub fn preview(value: &Value) -> String {
    let rendered = value.to_string();
    if rendered.chars().count() <= PREVIEW_LIMIT {
        return rendered;
    }
    let mut cut: String = rendered.chars().take(PREVIEW_LIMIT - 3).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(null), ValueKind::Null)]
    #[case(json!(true), ValueKind::Boolean)]
    #[case(json!(1.5), ValueKind::Number)]
    #[case(json!("x"), ValueKind::String)]
    #[case(json!([1]), ValueKind::Array)]
    #[case(json!({"a": 1}), ValueKind::Object)]
    fn classifies(#[case] value: Value, #[case] kind: ValueKind) {
        assert_eq!(ValueKind::of(&value), kind);
    }

    #[test]
    fn short_values_render_whole() {
        assert_eq!(preview(&json!({"a": 1})), r#"{"a":1}"#);
    }

    #[test]
    fn long_values_are_truncated() {
        let long = json!("a".repeat(100));
        let rendered = preview(&long);
        assert_eq!(rendered.chars().count(), PREVIEW_LIMIT);
        assert!(rendered.ends_with("..."));
    }
}
