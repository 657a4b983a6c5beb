//! Entry points for building a selector.
//!
//! Every function here starts a brand-new [`SelectorBuilder`], so two
//! selector expressions never share state even when one of them is later
//! used as an operand of [`combine`]. Because the builder starts empty, the
//! first part can never be out of order and these functions cannot fail.
//!
//! ```
//! use trellis_css::css_selector_builder::{combine, element};
//!
//! let left = element("div").id("main")?;
//! let mut selector = combine(left, "+", element("span"));
//! assert_eq!(selector.stringify(), "div#main + span");
//! # Ok::<(), trellis_css::OrderError>(())
//! ```

use crate::selector::{Fragment, FragmentKind, SelectorBuilder};

/// Start a selector with a type selector such as `div`.
#[must_use]
pub fn element(name: &str) -> SelectorBuilder {
    start(FragmentKind::Element, name)
}

/// Start a selector with an ID selector, `#name`.
#[must_use]
pub fn id(name: &str) -> SelectorBuilder {
    start(FragmentKind::Id, name)
}

/// Start a selector with a class selector, `.name`.
#[must_use]
pub fn class(name: &str) -> SelectorBuilder {
    start(FragmentKind::Class, name)
}

/// Start a selector with an attribute selector, `[spec]`.
#[must_use]
pub fn attr(spec: &str) -> SelectorBuilder {
    start(FragmentKind::Attribute, spec)
}

/// Start a selector with a pseudo-class, `:name`.
#[must_use]
pub fn pseudo_class(name: &str) -> SelectorBuilder {
    start(FragmentKind::PseudoClass, name)
}

/// Start a selector with a pseudo-element, `::name`.
#[must_use]
pub fn pseudo_element(name: &str) -> SelectorBuilder {
    start(FragmentKind::PseudoElement, name)
}

/// Join two selectors with a combinator into a new selector.
///
/// See [`SelectorBuilder::combine`].
#[must_use]
pub fn combine(left: SelectorBuilder, combinator: &str, right: SelectorBuilder) -> SelectorBuilder {
    SelectorBuilder::new().combine(left, combinator, right)
}

fn start(kind: FragmentKind, value: &str) -> SelectorBuilder {
    SelectorBuilder::from_fragment(Fragment::new(kind, value))
}
