//! TAGGED unions - dispatch on a discriminant field
//!
//! A tagged union reads one string field (by default `"type"`), parses it
//! into a closed [`Tag`] enum and hands the whole input to the variant
//! validator chosen by an exhaustive `match`. A missing or unrecognized
//! discriminant is reported before any variant validator runs.
//!
//! Variants whose payload sits under `"data"` use [`data_variant`];
//! payload-free variants use [`unit_variant`].
//!
//! # Examples
//!
//! ```
//! use pomoshtnik_validator::prelude::*;
//! use serde_json::json;
//!
//! pomoshtnik_validator::tags! {
//!     pub enum ShapeKind {
//!         Circle = "circle",
//!         Empty = "empty",
//!     }
//! }
//!
//! #[derive(Debug, PartialEq)]
//! enum Shape {
//!     Circle(f64),
//!     Empty,
//! }
//!
//! let shape = tagged(|kind: ShapeKind, input: &serde_json::Value| match kind {
//!     ShapeKind::Circle => data_variant(kind, number()).map(Shape::Circle).validate(input),
//!     ShapeKind::Empty => unit_variant(kind).map(|()| Shape::Empty).validate(input),
//! });
//!
//! assert_eq!(
//!     shape.validate(&json!({"type": "circle", "data": 2.0})),
//!     Ok(Shape::Circle(2.0))
//! );
//! let error = shape.validate(&json!({"type": "square"})).unwrap_err();
//! assert_eq!(error.code, codes::UNRECOGNIZED_VARIANT);
//! ```

use crate::combinators::Record;
use crate::foundation::{PathSegment, Validate, ValidationError, ValidationResult};
use serde_json::Value;
use std::marker::PhantomData;

/// Default discriminant field.
pub const TAG_FIELD: &str = "type";

/// Payload field of [`data_variant`]s.
pub const DATA_FIELD: &str = "data";

// ============================================================================
// TAG TRAIT
// ============================================================================

/// A closed set of string discriminants.
///
/// Usually generated with the [`tags!`](crate::tags) macro.
pub trait Tag: Copy + Eq + 'static {
    /// Every tag, in declaration order.
    const ALL: &'static [Self];

    /// Wire spelling of the tag.
    fn as_str(self) -> &'static str;

    /// Parses the wire spelling; exact, case-sensitive match.
    fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tag| tag.as_str() == raw)
    }

    /// Wire spellings of every tag.
    fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|tag| tag.as_str()).collect()
    }
}

// ============================================================================
// TAGGED UNION
// ============================================================================

/// Dispatches on a discriminant field to one variant validator.
#[derive(Clone, Copy)]
pub struct Tagged<K, F> {
    tag_field: &'static str,
    dispatch: F,
    _tag: PhantomData<fn() -> K>,
}

impl<K, F> Tagged<K, F> {
    /// Reads the discriminant from `field` instead of `"type"`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_tag_field(mut self, field: &'static str) -> Self {
        self.tag_field = field;
        self
    }

    /// The discriminant field.
    pub fn tag_field(&self) -> &'static str {
        self.tag_field
    }
}

impl<K, F> std::fmt::Debug for Tagged<K, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tagged")
            .field("tag_field", &self.tag_field)
            .finish_non_exhaustive()
    }
}

impl<K, F, T> Validate for Tagged<K, F>
where
    K: Tag,
    F: Fn(K, &Value) -> ValidationResult<T>,
{
    type Output = T;

    fn validate(&self, input: &Value) -> ValidationResult<T> {
        let Value::Object(fields) = input else {
            return Err(ValidationError::type_mismatch("object", input));
        };

        let raw = match fields.get(self.tag_field) {
            None => return Err(ValidationError::required(self.tag_field)),
            Some(Value::String(raw)) => raw,
            Some(other) => {
                return Err(ValidationError::type_mismatch("string", other)
                    .at(PathSegment::from(self.tag_field)));
            }
        };

        let tag = K::parse(raw).ok_or_else(|| {
            ValidationError::unrecognized_variant(raw, &K::names())
                .at(PathSegment::from(self.tag_field))
        })?;

        (self.dispatch)(tag, input)
    }
}

/// Creates a tagged union over the tag set `K`.
///
/// `dispatch` receives the parsed tag and the whole input.
pub fn tagged<K, F, T>(dispatch: F) -> Tagged<K, F>
where
    K: Tag,
    F: Fn(K, &Value) -> ValidationResult<T>,
{
    Tagged {
        tag_field: TAG_FIELD,
        dispatch,
        _tag: PhantomData,
    }
}

// ============================================================================
// VARIANTS
// ============================================================================

/// A variant carrying only its discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitVariant<K> {
    tag: K,
    tag_field: &'static str,
}

impl<K> UnitVariant<K> {
    #[must_use = "builder methods must be chained or built"]
    pub fn with_tag_field(mut self, field: &'static str) -> Self {
        self.tag_field = field;
        self
    }
}

impl<K: Tag> Validate for UnitVariant<K> {
    type Output = ();

    fn validate(&self, input: &Value) -> ValidationResult<()> {
        let mut record = Record::open(input)?;
        record.expect(self.tag_field, self.tag.as_str());
        record.finish()
    }
}

pub fn unit_variant<K: Tag>(tag: K) -> UnitVariant<K> {
    UnitVariant {
        tag,
        tag_field: TAG_FIELD,
    }
}

/// A variant whose payload sits under `"data"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataVariant<K, V> {
    tag: K,
    tag_field: &'static str,
    data: V,
}

impl<K, V> DataVariant<K, V> {
    #[must_use = "builder methods must be chained or built"]
    pub fn with_tag_field(mut self, field: &'static str) -> Self {
        self.tag_field = field;
        self
    }
}

impl<K: Tag, V: Validate> Validate for DataVariant<K, V> {
    type Output = V::Output;

    fn validate(&self, input: &Value) -> ValidationResult<V::Output> {
        let mut record = Record::open(input)?;
        record.expect(self.tag_field, self.tag.as_str());
        let data = record.field(DATA_FIELD, &self.data);
        record.finish()?;
        data.ok_or_else(|| ValidationError::required(DATA_FIELD))
    }
}

pub fn data_variant<K: Tag, V: Validate>(tag: K, data: V) -> DataVariant<K, V> {
    DataVariant {
        tag,
        tag_field: TAG_FIELD,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ValidateExt, codes};
    use crate::validators::{integer, string};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    crate::tags! {
        enum Op {
            Add = "add",
            Reset = "reset",
        }
    }

    #[derive(Debug, PartialEq)]
    enum Action {
        Add(i64),
        Reset,
    }

    fn action() -> impl Validate<Output = Action> {
        tagged(|op: Op, input: &Value| match op {
            Op::Add => data_variant(op, integer()).map(Action::Add).validate(input),
            Op::Reset => unit_variant(op).map(|()| Action::Reset).validate(input),
        })
    }

    #[test]
    fn dispatches_on_tag() {
        assert_eq!(
            action().validate(&json!({"type": "add", "data": 3})),
            Ok(Action::Add(3))
        );
        assert_eq!(action().validate(&json!({"type": "reset"})), Ok(Action::Reset));
    }

    #[rstest]
    #[case(json!({"data": 3}), codes::REQUIRED)]
    #[case(json!({"type": 7}), codes::TYPE_MISMATCH)]
    #[case(json!({"type": "Add"}), codes::UNRECOGNIZED_VARIANT)]
    #[case(json!("add"), codes::TYPE_MISMATCH)]
    fn rejects_bad_discriminants(#[case] input: Value, #[case] code: &str) {
        let error = action().validate(&input).unwrap_err();
        assert_eq!(error.code, code);
    }

    #[test]
    fn unrecognized_tag_lists_known_tags() {
        let error = action().validate(&json!({"type": "bogus"})).unwrap_err();
        assert_eq!(error.path.to_string(), "type");
        assert_eq!(error.param("value"), Some("bogus"));
        assert_eq!(error.param("known"), Some("add, reset"));
    }

    #[test]
    fn payload_errors_are_located_under_data() {
        let error = action()
            .validate(&json!({"type": "add", "data": "three"}))
            .unwrap_err();
        let entries = error.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, "data");
    }

    #[test]
    fn custom_tag_field() {
        let kind = tagged(|op: Op, input: &Value| match op {
            Op::Add => data_variant(op, string())
                .with_tag_field("kind")
                .validate(input),
            Op::Reset => unit_variant(op)
                .with_tag_field("kind")
                .map(|()| String::new())
                .validate(input),
        })
        .with_tag_field("kind");

        assert_eq!(kind.tag_field(), "kind");
        assert_eq!(
            kind.validate(&json!({"kind": "add", "data": "x"})),
            Ok("x".to_owned())
        );
        assert!(kind.validate(&json!({"type": "add", "data": "x"})).is_err());
    }

    #[test]
    fn tag_round_trips_its_names() {
        assert_eq!(Op::names(), vec!["add", "reset"]);
        assert_eq!(Op::parse("reset"), Some(Op::Reset));
        assert_eq!(Op::parse("RESET"), None);
    }
}
