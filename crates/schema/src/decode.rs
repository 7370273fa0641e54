//! Entry points from untyped JSON and JSON text.

use crate::error::Result;
use pomoshtnik_validator::foundation::{Decode, ValidationResult};
use serde_json::Value;

/// Decodes an already-parsed JSON value into `T`.
///
/// Rejections are logged at `debug` with the error code and how many
/// problems were found.
pub fn decode_value<T: Decode>(value: &Value) -> ValidationResult<T> {
    let outcome = T::decode(value);
    match &outcome {
        Ok(_) => tracing::trace!(target_type = std::any::type_name::<T>(), "payload decoded"),
        Err(error) => tracing::debug!(
            target_type = std::any::type_name::<T>(),
            code = %error.code,
            problems = error.leaves().len(),
            "payload rejected"
        ),
    }
    outcome
}

/// Parses JSON text and decodes it into `T`.
///
/// # Errors
///
/// [`DecodeError::Json`](crate::DecodeError::Json) if the text is not JSON,
/// [`DecodeError::Invalid`](crate::DecodeError::Invalid) if it does not
/// have the shape of `T`.
pub fn decode_str<T: Decode>(text: &str) -> Result<T> {
    let value: Value = serde_json::from_str(text)?;
    Ok(decode_value(&value)?)
}
