//! Error type for selector construction.

use super::FragmentKind;

/// A selector part was appended twice or out of canonical order.
///
/// These are caller bugs rather than transient faults; the builder that
/// rejected the part is dropped along with the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    /// An element, id or pseudo-element was appended to a selector that
    /// already has one.
    #[error(
        "Element, id and pseudo-element should not occur more than one time inside the selector (second {kind})"
    )]
    Duplicate {
        /// The kind that appeared twice.
        kind: FragmentKind,
    },

    /// A part was appended after a part that must come later.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element ({kind} after {after})"
    )]
    OutOfOrder {
        /// The kind being appended.
        kind: FragmentKind,
        /// The highest-ranked kind already present.
        after: FragmentKind,
    },
}

impl OrderError {
    /// The kind of the part that was rejected.
    #[must_use]
    pub const fn kind(&self) -> FragmentKind {
        match self {
            Self::Duplicate { kind } | Self::OutOfOrder { kind, .. } => *kind,
        }
    }
}
