//! Built-in leaf validators
//!
//! # Categories
//!
//! - **Primitive**: one validator per JSON scalar kind, plus `any`
//! - **Literal**: exact constants, closed value sets and [`Tag`](crate::combinators::Tag) enums
//!
//! # Examples
//!
//! ```
//! use pomoshtnik_validator::prelude::*;
//! use serde_json::json;
//!
//! assert!(is_string(&json!("x")));
//! assert_eq!(constant("created").validate(&json!("created")), Ok(()));
//! assert!(one_of_literals(["w92", "original"]).matches(&json!("w92")));
//! ```

pub mod literal;
pub mod primitive;

pub use literal::{Constant, Literal, OneOfLiterals, constant, literal, one_of_literals};
pub use primitive::{
    Any, Boolean, Integer, Null, Number, Str, Unsigned, any, boolean, integer, is_boolean,
    is_integer, is_null, is_number, is_string, is_unsigned, null, number, string, unsigned,
};
