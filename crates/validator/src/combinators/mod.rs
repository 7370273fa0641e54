//! Combinators for composing decoders
//!
//! # Available Combinators
//!
//! - **Record**: field-by-field object decoding with error accumulation
//! - **ArrayOf**: every element of an array
//! - **Optional / Nullable**: fields that may be absent or `null`
//! - **Or / OneOf**: untagged unions, first match wins
//! - **Tagged**: discriminated unions over a closed [`Tag`] set
//! - **Map / AndThen**: post-processing of decoded values
//! - **Decoder / FromFn**: adapters from `Decode` types and closures
//!
//! # Examples
//!
//! ```
//! use pomoshtnik_validator::prelude::*;
//! use serde_json::json;
//!
//! let tags = string().array().optional();
//! assert_eq!(tags.validate(&json!(null)), Ok(None));
//! assert_eq!(tags.validate(&json!(["a"])), Ok(Some(vec!["a".to_owned()])));
//! ```

pub mod array;
pub mod decode;
pub mod map;
pub mod optional;
pub mod or;
pub mod record;
pub mod tagged;

pub use array::{ArrayOf, array};
pub use decode::{Decoder, FromFn, decoder, from_fn};
pub use map::{AndThen, Map};
pub use optional::{Nullable, Optional, nullable, optional};
pub use or::{OneOf, Or, one_of, or};
pub use record::{Record, UnknownFields};
pub use tagged::{
    DATA_FIELD, DataVariant, TAG_FIELD, Tag, Tagged, UnitVariant, data_variant, tagged,
    unit_variant,
};
