//! Ordering-checked selector builder.

use std::fmt;

use trellis_common::warning::warn_once;

use super::{Combinator, Fragment, FragmentKind, OrderError};

/// [§ 3.1 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// Accumulates selector fragments and renders them as one string.
///
/// Parts must be appended in canonical order (element, id, class, attribute,
/// pseudo-class, pseudo-element). Element, id and pseudo-element may appear
/// once each. Appending methods take the builder by value and hand it back
/// on success, so a rejected part never leaves the builder half-updated.
///
/// ```
/// use trellis_css::SelectorBuilder;
///
/// let mut selector = SelectorBuilder::new()
///     .element("a")?
///     .attr(r#"href$=".png""#)?
///     .pseudo_class("focus")?;
/// assert_eq!(selector.stringify(), r#"a[href$=".png"]:focus"#);
/// # Ok::<(), trellis_css::OrderError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    fragments: Vec<Fragment>,
}

impl SelectorBuilder {
    /// Create an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    /// Start a builder from a single fragment. Always valid on an empty builder.
    pub(crate) fn from_fragment(fragment: Fragment) -> Self {
        Self {
            fragments: vec![fragment],
        }
    }

    /// Append a type selector such as `div`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError`] if an element is already present or any other
    /// ranked part has been appended.
    pub fn element(self, name: &str) -> Result<Self, OrderError> {
        self.append(FragmentKind::Element, name)
    }

    /// Append an ID selector, rendered as `#name`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError`] if an id is already present or a class,
    /// attribute, pseudo-class or pseudo-element has been appended.
    pub fn id(self, name: &str) -> Result<Self, OrderError> {
        self.append(FragmentKind::Id, name)
    }

    /// Append a class selector, rendered as `.name`. Repeatable.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError`] if an attribute, pseudo-class or
    /// pseudo-element has been appended.
    pub fn class(self, name: &str) -> Result<Self, OrderError> {
        self.append(FragmentKind::Class, name)
    }

    /// Append an attribute selector, rendered as `[spec]`. The bracket
    /// contents are taken verbatim. Repeatable.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError`] if a pseudo-class or pseudo-element has been
    /// appended.
    pub fn attr(self, spec: &str) -> Result<Self, OrderError> {
        self.append(FragmentKind::Attribute, spec)
    }

    /// Append a pseudo-class, rendered as `:name`. Repeatable.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError`] if a pseudo-element has been appended.
    pub fn pseudo_class(self, name: &str) -> Result<Self, OrderError> {
        self.append(FragmentKind::PseudoClass, name)
    }

    /// Append a pseudo-element, rendered as `::name`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError`] if a pseudo-element is already present.
    pub fn pseudo_element(self, name: &str) -> Result<Self, OrderError> {
        self.append(FragmentKind::PseudoElement, name)
    }

    /// [§ 15 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
    ///
    /// Append `left <combinator> right` as a single fragment. Both operands
    /// are consumed. The fragment is not order-checked and may sit next to
    /// any other fragment.
    ///
    /// `combinator` is written out as given. Anything other than `" "`,
    /// `">"`, `"+"` or `"~"` is still accepted but reported once through
    /// [`warn_once`].
    #[must_use]
    pub fn combine(mut self, left: Self, combinator: &str, right: Self) -> Self {
        if Combinator::from_symbol(combinator).is_none() {
            warn_once(
                "CSS",
                &format!("unrecognized combinator '{combinator}' passed to combine"),
            );
        }
        self.fragments.push(Fragment::combination(
            &left.into_string(),
            combinator,
            &right.into_string(),
        ));
        self
    }

    /// Same as [`SelectorBuilder::combine`] with a typed combinator.
    #[must_use]
    pub fn combine_with(self, left: Self, combinator: Combinator, right: Self) -> Self {
        self.combine(left, combinator.as_str(), right)
    }

    /// Render every fragment in append order and reset the builder.
    ///
    /// A second call without appends in between returns an empty string.
    /// Use the [`fmt::Display`] impl to render without resetting.
    pub fn stringify(&mut self) -> String {
        let rendered = self.to_string();
        self.fragments.clear();
        rendered
    }

    /// Render the builder and consume it.
    #[must_use]
    pub fn into_string(mut self) -> String {
        self.stringify()
    }

    /// The fragments appended so far, in order.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Number of fragments appended so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether nothing has been appended since creation or the last
    /// [`SelectorBuilder::stringify`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    fn append(mut self, kind: FragmentKind, value: &str) -> Result<Self, OrderError> {
        self.check_order(kind)?;
        self.fragments.push(Fragment::new(kind, value));
        Ok(self)
    }

    /// Reject `kind` if it would duplicate a single-use part or come after a
    /// higher-ranked part. Combinations are skipped on both sides.
    fn check_order(&self, kind: FragmentKind) -> Result<(), OrderError> {
        if kind.rank().is_none() {
            return Ok(());
        }

        if !kind.is_repeatable() && self.fragments.iter().any(|f| f.kind() == kind) {
            return Err(OrderError::Duplicate { kind });
        }

        match self.high_water_mark() {
            Some(after) if after.rank() > kind.rank() => Err(OrderError::OutOfOrder { kind, after }),
            _ => Ok(()),
        }
    }

    /// The highest-ranked kind appended so far.
    fn high_water_mark(&self) -> Option<FragmentKind> {
        self.fragments
            .iter()
            .map(Fragment::kind)
            .filter(|kind| kind.rank().is_some())
            .max_by_key(|kind| kind.rank())
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            f.write_str(fragment.text())?;
        }
        Ok(())
    }
}
