use serde::Serialize;
use serde::de::DeserializeOwned;

/// Failure converting a value to or from JSON text.
#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    /// The value could not be written as JSON.
    #[error("failed to serialize value to JSON: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The text was not valid JSON, or did not have the shape of the target type.
    #[error("failed to deserialize JSON: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Serialize `value` as compact JSON text.
///
/// ```
/// use trellis_objects::{Rectangle, get_json};
///
/// let json = get_json(&Rectangle::new(10.0, 20.0))?;
/// assert_eq!(json, r#"{"width":10.0,"height":20.0}"#);
/// # Ok::<(), trellis_objects::JsonError>(())
/// ```
///
/// # Errors
///
/// Returns [`JsonError::Serialize`] if the value's `Serialize` impl fails,
/// e.g. a map with non-string keys.
pub fn get_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(JsonError::Serialize)
}

/// Decode JSON text into a `T`.
///
/// The type parameter decides which methods the decoded value has: decoding
/// into [`crate::Rectangle`] gives back a value with `area()`.
///
/// # Errors
///
/// Returns [`JsonError::Deserialize`] if `text` is not valid JSON or does not
/// match the shape of `T`.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, JsonError> {
    serde_json::from_str(text).map_err(JsonError::Deserialize)
}
