//! Macros for declaring decoders with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`] — Create a primitive validator (struct + Validate impl + factory fn + predicate)
//! - [`tags!`] — Declare a closed set of string discriminants
//! - [`record!`] — Decode a JSON object into a struct, field by field
//! - [`any_of!`] — OR-chain multiple validators
//!
//! # Examples
//!
//! ```
//! use pomoshtnik_validator::prelude::*;
//! use serde_json::json;
//!
//! #[derive(Debug, PartialEq)]
//! struct Genre {
//!     id: i64,
//!     name: String,
//! }
//!
//! let genre = from_fn(|input| {
//!     pomoshtnik_validator::record!(input => Genre {
//!         id: "id" => integer(),
//!         name: "name" => string(),
//!     })
//! });
//!
//! assert_eq!(
//!     genre.validate(&json!({"id": 18, "name": "Drama"})),
//!     Ok(Genre { id: 18, name: "Drama".into() })
//! );
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a primitive validator: a unit struct, its `Validate`
/// implementation, a factory function and a bare type predicate.
///
/// The `decode` block yields `Option<Output>`; `None` becomes a
/// `type_mismatch` error naming the `expect`ed kind.
///
/// ```rust,ignore
/// validator! {
///     /// Accepts JSON strings.
///     pub Str => String;
///     expect "string";
///     decode(input) { input.as_str().map(str::to_owned) }
///     fn string();
///     predicate is_string;
/// }
/// ```
#[macro_export]
macro_rules! validator {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident => $output:ty;
        expect $expected:literal;
        decode($inp:ident) $decode:block
        fn $factory:ident();
        predicate $predicate:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Output = $output;

            fn validate(
                &self,
                $inp: &$crate::__private::serde_json::Value,
            ) -> $crate::foundation::ValidationResult<$output> {
                let decoded: ::std::option::Option<$output> = $decode;
                decoded.ok_or_else(|| {
                    $crate::foundation::ValidationError::type_mismatch($expected, $inp)
                })
            }

            fn matches(&self, $inp: &$crate::__private::serde_json::Value) -> bool {
                let decoded: ::std::option::Option<$output> = $decode;
                decoded.is_some()
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }

        #[doc = concat!("Type predicate for ", $expected, " values.")]
        #[must_use]
        $vis fn $predicate(value: &$crate::__private::serde_json::Value) -> bool {
            $crate::foundation::Validate::matches(&$name, value)
        }
    };
}

// ============================================================================
// TAGS MACRO
// ============================================================================

/// Declares a closed set of string discriminants.
///
/// Generates the enum, its [`Tag`](crate::combinators::Tag) implementation,
/// `Display`, `FromStr`, a string `Serialize` and a [`Decode`](crate::foundation::Decode)
/// implementation that accepts exactly the listed spellings.
///
/// ```
/// use pomoshtnik_validator::combinators::Tag;
///
/// pomoshtnik_validator::tags! {
///     /// Kinds of repository search.
///     pub enum RepositorySearch {
///         Name = "name",
///         Topics = "topics",
///     }
/// }
///
/// assert_eq!(RepositorySearch::Topics.as_str(), "topics");
/// assert_eq!("name".parse::<RepositorySearch>().ok(), Some(RepositorySearch::Name));
/// assert_eq!(RepositorySearch::Name.to_string(), "name");
/// ```
#[macro_export]
macro_rules! tags {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::combinators::Tag for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::combinators::Tag::as_str(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::foundation::ValidationError;

            fn from_str(raw: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::combinators::Tag>::parse(raw).ok_or_else(|| {
                    $crate::foundation::ValidationError::unrecognized_variant(
                        raw,
                        &<Self as $crate::combinators::Tag>::names(),
                    )
                })
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str($crate::combinators::Tag::as_str(*self))
            }
        }

        impl $crate::foundation::Decode for $name {
            fn decode(
                input: &$crate::__private::serde_json::Value,
            ) -> $crate::foundation::ValidationResult<Self> {
                $crate::foundation::Validate::validate(
                    &$crate::validators::literal::<Self>(),
                    input,
                )
            }
        }
    };
}

// ============================================================================
// RECORD MACRO
// ============================================================================

/// Decodes a JSON object into a struct.
///
/// Each entry `field: "key" => validator` reads the object field `key` with
/// `validator` and stores the result in the struct field `field`. Every
/// field is read even after a failure; the error lists all of them.
///
/// An optional bracket group lists constant fields that must be present
/// with exactly the given value, and a leading `strict` rejects fields the
/// list does not declare.
///
/// The macro evaluates to `ValidationResult<Type>`.
///
/// ```
/// use pomoshtnik_validator::prelude::*;
/// use serde_json::json;
///
/// #[derive(Debug)]
/// struct Created {
///     name: String,
/// }
///
/// let input = json!({"action": "created", "name": "x", "extra": 1});
///
/// let loose = pomoshtnik_validator::record!(&input => Created ["action" == "created"] {
///     name: "name" => string(),
/// });
/// assert_eq!(loose.map(|c| c.name), Ok("x".to_owned()));
///
/// let strict = pomoshtnik_validator::record!(strict &input => Created ["action" == "created"] {
///     name: "name" => string(),
/// });
/// assert!(strict.unwrap_err().names_field(codes::UNKNOWN_FIELD, "extra"));
/// ```
#[macro_export]
macro_rules! record {
    (
        @read $policy:expr, $input:expr, $ty:ident,
        [$($ckey:literal == $cval:expr),*],
        { $($field:ident : $key:literal => $validator:expr),+ }
    ) => {
        match $crate::combinators::Record::open($input) {
            ::std::result::Result::Err(error) => ::std::result::Result::Err(error),
            ::std::result::Result::Ok(record) => {
                let mut record = record.with_policy($policy);
                $( record.expect($ckey, $cval); )*
                $( let $field = record.field($key, &$validator); )+
                match record.finish() {
                    ::std::result::Result::Err(error) => ::std::result::Result::Err(error),
                    ::std::result::Result::Ok(()) => match ($($field,)+) {
                        ($(::std::option::Option::Some($field),)+) => {
                            ::std::result::Result::Ok($ty { $($field),+ })
                        }
                        _ => ::std::result::Result::Err(
                            $crate::foundation::ValidationError::custom(
                                "record field missing after a successful read",
                            ),
                        ),
                    },
                }
            }
        }
    };

    (
        strict $input:expr => $ty:ident
        $([ $($ckey:literal == $cval:expr),+ $(,)? ])?
        { $($field:ident : $key:literal => $validator:expr),+ $(,)? }
    ) => {
        $crate::record!(
            @read $crate::combinators::UnknownFields::Deny, $input, $ty,
            [$($($ckey == $cval),+)?],
            { $($field : $key => $validator),+ }
        )
    };

    (
        $input:expr => $ty:ident
        $([ $($ckey:literal == $cval:expr),+ $(,)? ])?
        { $($field:ident : $key:literal => $validator:expr),+ $(,)? }
    ) => {
        $crate::record!(
            @read $crate::combinators::UnknownFields::Ignore, $input, $ty,
            [$($($ckey == $cval),+)?],
            { $($field : $key => $validator),+ }
        )
    };
}

// ============================================================================
// ANY_OF MACRO
// ============================================================================

/// OR-chains multiple validators of one output type: the first that
/// accepts the input wins.
///
/// ```
/// use pomoshtnik_validator::prelude::*;
/// use serde_json::json;
///
/// let label = pomoshtnik_validator::any_of!(
///     string(),
///     integer().map(|n| n.to_string()),
///     boolean().map(|b| b.to_string()),
/// );
/// assert_eq!(label.validate(&json!(7)), Ok("7".to_owned()));
/// assert_eq!(label.validate(&json!(null)).unwrap_err().nested.len(), 3);
/// ```
#[macro_export]
macro_rules! any_of {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::combinators::Or::new($first, $crate::any_of!($($rest),+))
    };
}
