//! Plain data objects and their JSON form.
//!
//! - [`Rectangle`] - width and height with a computed area
//! - [`get_json`] / [`from_json`] - serialize any value to JSON text and back

/// Serialize to and from JSON text.
pub mod json;
/// Rectangle value type.
pub mod rectangle;

pub use json::{JsonError, from_json, get_json};
pub use rectangle::Rectangle;
