//! Error types for decoding failures
//!
//! This module provides a structured error type that supports nested
//! errors, path-qualified locations, stable error codes, and parameterized
//! messages.
//!
//! All string fields use `Cow<'static, str>` so static codes and messages
//! never allocate.

use crate::foundation::kind::{ValueKind, preview};
use crate::foundation::path::{Path, PathSegment};
use serde_json::Value;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

/// Stable machine-readable error codes.
pub mod codes {
    /// The value's runtime kind is not the expected kind.
    pub const TYPE_MISMATCH: &str = "type_mismatch";
    /// A required record field is absent.
    pub const REQUIRED: &str = "required";
    /// One or more record fields failed.
    pub const INVALID_RECORD: &str = "invalid_record";
    /// A record carries a field the shape does not declare (strict records only).
    pub const UNKNOWN_FIELD: &str = "unknown_field";
    /// One or more array elements failed.
    pub const INVALID_ELEMENTS: &str = "invalid_elements";
    /// The value is not one of the allowed literals.
    pub const INVALID_LITERAL: &str = "invalid_literal";
    /// No alternative of a one-of validator matched.
    pub const NO_MATCH: &str = "no_match";
    /// A tagged union's discriminant names no known variant.
    pub const UNRECOGNIZED_VARIANT: &str = "unrecognized_variant";
    /// A token command list is empty.
    pub const EMPTY_COMMAND: &str = "empty_command";
    /// A token command name is not in the command table.
    pub const UNRECOGNIZED_COMMAND: &str = "unrecognized_command";
    /// Caller-defined failure.
    pub const CUSTOM: &str = "custom";
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured decoding error.
///
/// An error is either a leaf (a single message about one location) or a
/// branch that groups the failures of a record's fields, an array's
/// elements, or a one-of's alternatives in [`nested`](Self::nested).
/// Paths are absolute: when a parent wraps a child error it prefixes its own
/// segment onto the child and every error below it.
///
/// # Examples
///
/// ```
/// use pomoshtnik_validator::foundation::{PathSegment, ValidationError};
///
/// let error = ValidationError::new("custom", "bad")
///     .at(PathSegment::index(3))
///     .at("items".into());
/// assert_eq!(error.path.to_string(), "items/[3]");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error code for programmatic handling. See [`codes`].
    pub code: Cow<'static, str>,

    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    /// Location of the failing sub-value, relative to the decoded root.
    pub path: Path,

    /// Ordered key-value parameters (typically 0-3).
    pub params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>,

    /// Child failures grouped under this error.
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new error with a code and message at the root path.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: Path::root(),
            params: SmallVec::new(),
            nested: Vec::new(),
        }
    }

    /// Prefixes `segment` onto this error and every nested error.
    #[must_use = "builder methods must be chained or built"]
    pub fn at(mut self, segment: PathSegment) -> Self {
        self.prefix(&segment);
        self
    }

    fn prefix(&mut self, segment: &PathSegment) {
        self.path.prepend(segment.clone());
        for child in &mut self.nested {
            child.prefix(segment);
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the nested errors.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested(mut self, errors: Vec<Self>) -> Self {
        self.nested = errors;
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// The errors with no children, depth-first. These carry the actual
    /// diagnostics; branches only group them.
    #[must_use]
    pub fn leaves(&self) -> Vec<&Self> {
        if self.nested.is_empty() {
            return vec![self];
        }
        self.nested.iter().flat_map(Self::leaves).collect()
    }

    /// Ordered `(location, message)` pairs, one per leaf.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, String)> {
        self.leaves()
            .into_iter()
            .map(|leaf| (leaf.path.to_string(), leaf.message.to_string()))
            .collect()
    }

    /// Returns true if some leaf has `code` and its path names `field`.
    #[must_use]
    pub fn names_field(&self, code: &str, field: &str) -> bool {
        self.leaves()
            .iter()
            .any(|leaf| leaf.code == code && leaf.path.contains_field(field))
    }

    /// Converts the error into a JSON structure for logs and API replies.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        use serde_json::json;

        let params: serde_json::Map<String, Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect();

        json!({
            "code": self.code,
            "message": self.message,
            "path": self.path.to_string(),
            "params": params,
            "nested": self.nested.iter().map(Self::to_json_value).collect::<Vec<_>>(),
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "{}: {}", self.code, self.message)?;
        } else {
            write!(f, "[{}] {}: {}", self.path, self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        if !self.nested.is_empty() {
            write!(f, "\n  Nested errors:")?;
            for (i, error) in self.nested.iter().enumerate() {
                write!(f, "\n    {}. {}", i + 1, error)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a kind-mismatch error naming the expected kind and the
    /// actual value.
    pub fn type_mismatch(expected: impl Into<Cow<'static, str>>, actual: &Value) -> Self {
        let expected = expected.into();
        let kind = ValueKind::of(actual);
        let shown = preview(actual);
        Self::new(
            codes::TYPE_MISMATCH,
            format!("expected {expected}, found {kind} `{shown}`"),
        )
        .with_param("expected", expected)
        .with_param("actual", kind.as_str())
    }

    /// Creates a missing-field error located at `field`.
    pub fn required(field: impl Into<Cow<'static, str>>) -> Self {
        let field = field.into();
        Self::new(codes::REQUIRED, format!("missing required field `{field}`"))
            .at(PathSegment::Field(field))
    }

    /// Creates an unexpected-field error located at `field`.
    pub fn unknown_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::new(codes::UNKNOWN_FIELD, format!("unexpected field `{field}`"))
            .at(PathSegment::from(field))
    }

    /// Creates an unrecognized-discriminant error.
    pub fn unrecognized_variant(value: &str, known: &[&str]) -> Self {
        let known = known.join(", ");
        Self::new(
            codes::UNRECOGNIZED_VARIANT,
            format!("unrecognized variant `{value}`, expected one of: {known}"),
        )
        .with_param("value", value.to_owned())
        .with_param("known", known)
    }

    /// Creates an error for a value outside a closed literal set.
    pub fn invalid_literal(actual: &Value, allowed: &[Value]) -> Self {
        let allowed = allowed
            .iter()
            .map(Value::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let shown = preview(actual);
        Self::new(
            codes::INVALID_LITERAL,
            format!("`{shown}` is not one of: {allowed}"),
        )
        .with_param("actual", shown)
        .with_param("allowed", allowed)
    }

    /// Groups the failures of every alternative of a one-of validator.
    #[must_use]
    pub fn no_match(alternatives: Vec<Self>) -> Self {
        let count = alternatives.len();
        Self::new(
            codes::NO_MATCH,
            format!("none of {count} alternatives matched"),
        )
        .with_param("alternatives", count.to_string())
        .with_nested(alternatives)
    }

    /// Groups the failing fields of a record.
    #[must_use]
    pub fn invalid_record(field_errors: Vec<Self>) -> Self {
        let count = field_errors.len();
        Self::new(
            codes::INVALID_RECORD,
            format!("{count} field(s) failed validation"),
        )
        .with_param("failed_count", count.to_string())
        .with_nested(field_errors)
    }

    /// Creates the error for a token command list with no tokens.
    #[must_use]
    pub fn empty_command() -> Self {
        Self::new(codes::EMPTY_COMMAND, "empty command")
    }

    /// Creates the error for a command name missing from the command table.
    pub fn unrecognized_command(name: &str, known: &[&str]) -> Self {
        Self::new(
            codes::UNRECOGNIZED_COMMAND,
            format!("unrecognized command `{name}`"),
        )
        .with_param("command", name.to_owned())
        .with_param("known", known.join(", "))
    }

    /// Creates a "custom" error with a message.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(codes::CUSTOM, message)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// A collection of sibling validation errors.
///
/// Combinators that keep going after a failure (records, arrays) gather
/// child errors here before folding them into one parent error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consumes the collection, returning the errors.
    #[must_use]
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }
}

// ============================================================================
// TESTS
// ============================================================================
