//! Prelude module for convenient imports.
//!
//! Provides a single `use pomoshtnik_validator::prelude::*;` import that
//! brings in the traits, error types, validators and combinators needed to
//! write decoders.
//!
//! # Examples
//!
//! ```
//! use pomoshtnik_validator::prelude::*;
//! use serde_json::json;
//!
//! let ids = unsigned().array();
//! assert_eq!(ids.validate(&json!([1, 2])), Ok(vec![1, 2]));
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, locations
// ============================================================================

pub use crate::foundation::{
    BoxValidator, Decode, Path, PathSegment, Validate, ValidateExt, ValidationError,
    ValidationErrors, ValidationResult, ValueKind, codes,
};

// ============================================================================
// VALIDATORS: Primitives and literals
// ============================================================================

pub use crate::validators::{
    any, boolean, constant, integer, is_boolean, is_integer, is_null, is_number, is_string,
    is_unsigned, literal, null, number, one_of_literals, string, unsigned,
};

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    Record, Tag, UnknownFields, array, data_variant, decoder, from_fn, nullable, one_of,
    optional, tagged, unit_variant,
};
