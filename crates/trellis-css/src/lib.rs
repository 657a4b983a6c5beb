//! CSS selector construction for Trellis.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 3.1 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element parts
//!   - Canonical ordering and duplicate checks
//!
//! - **Complex selectors** ([§ 3.1 Complex selectors](https://www.w3.org/TR/selectors-4/#complex))
//!   - Joining two selectors with a combinator, recursively
//!
//! # Not Implemented
//!
//! - Parsing CSS text
//! - Selector matching and specificity

/// Stateless entry points that start a fresh selector per call.
pub mod css_selector_builder;
/// Selector fragments, combinators and the ordering-checked builder.
pub mod selector;

// Re-exports for convenience
pub use selector::{Combinator, Fragment, FragmentKind, OrderError, SelectorBuilder};
