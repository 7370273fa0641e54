//! # pomoshtnik-validator
//!
//! Composable runtime decoders that turn untyped JSON into typed Rust values
//! or into structured, located errors.
//!
//! ## Quick Start
//!
//! ```
//! use pomoshtnik_validator::prelude::*;
//! use serde_json::json;
//!
//! // Compose decoders with .array() / .optional() / .or()
//! let names = string().array().optional();
//! assert_eq!(names.validate(&json!(["a", "b"])), Ok(Some(vec!["a".into(), "b".into()])));
//!
//! let error = names.validate(&json!(["a", 2])).unwrap_err();
//! assert_eq!(error.entries()[0].0, "[1]");
//! ```
//!
//! ## Declaring Decoders
//!
//! - [`record!`] decodes a JSON object into a struct field by field
//! - [`tags!`] declares a closed set of discriminants for tagged unions
//! - [`validator!`] declares a primitive validator
//! - [`any_of!`] OR-chains alternatives
//!
//! Types implement [`Decode`](foundation::Decode) to own one canonical
//! decoder, reachable as [`decoder::<T>()`](combinators::decoder).
//!
//! ## Built-in Validators
//!
//! - **Primitive**: [`string`](validators::string), [`number`](validators::number),
//!   [`integer`](validators::integer), [`unsigned`](validators::unsigned),
//!   [`boolean`](validators::boolean), [`null`](validators::null), [`any`](validators::any)
//! - **Literal**: [`constant`](validators::constant), [`one_of_literals`](validators::one_of_literals),
//!   [`literal`](validators::literal)

// ValidationError is the single error type of every decoder; boxing it
// would add an indirection to each call.
#![allow(clippy::result_large_err)]
// Nested combinators (Optional<ArrayOf<Map<...>>>) produce long types.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json;
}
