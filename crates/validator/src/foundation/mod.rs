//! Core decoding types and traits
//!
//! This module contains the fundamental building blocks of the decoding
//! system:
//!
//! - **Traits**: `Validate`, `ValidateExt`, `Decode`
//! - **Errors**: `ValidationError`, `ValidationErrors`, error `codes`
//! - **Locations**: `Path`, `PathSegment`
//! - **Kinds**: `ValueKind` and compact value previews
//!
//! # Architecture
//!
//! ## 1. Validators produce values
//!
//! A validator turns an untyped [`serde_json::Value`] into a typed output:
//!
//! ```rust,ignore
//! impl Validate for Str {
//!     type Output = String;
//!
//!     fn validate(&self, input: &Value) -> ValidationResult<String> {
//!         // ...
//!     }
//! }
//! ```
//!
//! ## 2. Composition
//!
//! Validators compose bottom-up into one validator per target type:
//!
//! ```rust,ignore
//! let sizes = literal::<PosterSize>().array();
//! let label = string().optional();
//! ```
//!
//! ## 3. Errors carry locations
//!
//! Records and arrays keep going after a failure and report every problem,
//! each with the path that leads to it:
//!
//! ```rust,ignore
//! let error = validator.validate(&input).unwrap_err();
//! for (location, message) in error.entries() {
//!     println!("{location}: {message}");
//! }
//! ```

pub mod error;
pub mod kind;
pub mod path;
pub mod traits;

pub use error::{ValidationError, ValidationErrors, codes};
pub use kind::{PREVIEW_LIMIT, ValueKind, preview};
pub use path::{Path, PathSegment};
pub use traits::{BoxValidator, Decode, Validate, ValidateExt};

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// The outcome of one decode attempt: `Ok` is the valid variant carrying the
/// typed value, `Err` the invalid variant carrying the error tree.
pub type ValidationResult<T> = Result<T, ValidationError>;
