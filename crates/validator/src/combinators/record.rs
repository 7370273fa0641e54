//! RECORD reader - decodes a JSON object field by field
//!
//! A [`Record`] walks a declared set of fields over one input object.
//! Every field is decoded even after an earlier one fails, so a single pass
//! reports all problems. [`finish`](Record::finish) folds the collected
//! field errors into one `invalid_record` error whose leaves are prefixed
//! with their field names.
//!
//! Most call sites go through the [`record!`](crate::record) macro, which
//! builds a typed struct from a field list.
//!
//! # Examples
//!
//! ```
//! use pomoshtnik_validator::combinators::Record;
//! use pomoshtnik_validator::validators::{integer, string};
//! use serde_json::json;
//!
//! let input = json!({"name": "Alice", "age": "old"});
//! let mut record = Record::open(&input).unwrap();
//! let name = record.field("name", &string());
//! let age = record.field("age", &integer());
//!
//! assert_eq!(name.as_deref(), Some("Alice"));
//! assert_eq!(age, None);
//! let error = record.finish().unwrap_err();
//! assert_eq!(error.entries()[0].0, "age");
//! ```

use crate::foundation::{
    PathSegment, Validate, ValidationError, ValidationErrors, ValidationResult,
};
use serde_json::{Map, Value};
use smallvec::SmallVec;

/// What a record does with input fields its shape does not declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnknownFields {
    /// Extra fields are skipped, so producers may add fields without
    /// breaking existing consumers.
    #[default]
    Ignore,
    /// Every extra field is reported as an `unknown_field` error.
    Deny,
}

/// Field-by-field reader over one JSON object.
#[derive(Debug)]
pub struct Record<'a> {
    fields: &'a Map<String, Value>,
    policy: UnknownFields,
    declared: SmallVec<[&'static str; 8]>,
    errors: ValidationErrors,
}

impl<'a> Record<'a> {
    /// Starts reading `input`, which must be an object.
    pub fn open(input: &'a Value) -> ValidationResult<Self> {
        match input {
            Value::Object(fields) => Ok(Self {
                fields,
                policy: UnknownFields::default(),
                declared: SmallVec::new(),
                errors: ValidationErrors::new(),
            }),
            other => Err(ValidationError::type_mismatch("object", other)),
        }
    }

    /// Sets the unknown-field policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_policy(mut self, policy: UnknownFields) -> Self {
        self.policy = policy;
        self
    }

    /// Decodes the field `name` with `validator`.
    ///
    /// Returns `None` if the field failed; the failure is kept for
    /// [`finish`](Self::finish). An absent field takes the validator's
    /// [`when_absent`](Validate::when_absent) value, or is reported as
    /// `required`.
    pub fn field<V>(&mut self, name: &'static str, validator: &V) -> Option<V::Output>
    where
        V: Validate + ?Sized,
    {
        self.declared.push(name);
        match self.fields.get(name) {
            None => {
                let absent = validator.when_absent();
                if absent.is_none() {
                    self.errors.add(ValidationError::required(name));
                }
                absent
            }
            Some(value) => match validator.validate(value) {
                Ok(output) => Some(output),
                Err(error) => {
                    self.errors.add(error.at(PathSegment::from(name)));
                    None
                }
            },
        }
    }

    /// Requires the field `name` to equal `expected` exactly.
    pub fn expect(&mut self, name: &'static str, expected: impl Into<Value>) -> bool {
        let constant = crate::validators::constant(expected);
        self.field(name, &constant).is_some()
    }

    /// Errors collected so far.
    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Ends the read, failing if any field failed (or, for strict records,
    /// if the input carries undeclared fields).
    pub fn finish(mut self) -> ValidationResult<()> {
        if self.policy == UnknownFields::Deny {
            for key in self.fields.keys() {
                if !self.declared.contains(&key.as_str()) {
                    self.errors.add(ValidationError::unknown_field(key.clone()));
                }
            }
        }

        if self.errors.has_errors() {
            Err(ValidationError::invalid_record(self.errors.into_vec()))
        } else {
            Ok(())
        }
    }
}
