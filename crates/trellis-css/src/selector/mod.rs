//! CSS selector fragments and combinators
//!
//! This module models the pieces of a selector per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/). Each piece is
//! stored already rendered, tagged with the kind of simple selector it came
//! from so ordering rules never need to inspect the text.

mod builder;
mod error;

use std::fmt;

pub use builder::SelectorBuilder;
pub use error::OrderError;

/// [§ 5 Elemental selectors](https://www.w3.org/TR/selectors-4/#elemental-selectors)
/// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
///
/// The kind of a selector fragment.
///
/// Variants are declared in canonical order, so the derived `Ord` agrees with
/// [`FragmentKind::rank`] for every ranked kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FragmentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `p`, `span`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Examples: `#main`, `#nav-bar`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.highlight`, `.btn`
    Class,

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[src$=".png"]`
    Attribute,

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:hover`, `:nth-child(2)`
    PseudoClass,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Examples: `::before`, `::after`
    PseudoElement,

    /// Two selectors joined by a combinator. Carries no rank.
    ///
    /// Example: `div#main + span`
    Combination,
}

impl FragmentKind {
    /// Position of this kind in the canonical order, starting at 1 for
    /// element. `None` for combinations, which are never order-checked.
    #[must_use]
    pub const fn rank(self) -> Option<u8> {
        match self {
            Self::Element => Some(1),
            Self::Id => Some(2),
            Self::Class => Some(3),
            Self::Attribute => Some(4),
            Self::PseudoClass => Some(5),
            Self::PseudoElement => Some(6),
            Self::Combination => None,
        }
    }

    /// Whether more than one fragment of this kind may appear in a selector.
    #[must_use]
    pub const fn is_repeatable(self) -> bool {
        matches!(self, Self::Class | Self::Attribute | Self::PseudoClass)
    }

    /// Syntactic marks wrapped around a value of this kind.
    const fn affixes(self) -> (&'static str, &'static str) {
        match self {
            Self::Element | Self::Combination => ("", ""),
            Self::Id => ("#", ""),
            Self::Class => (".", ""),
            Self::Attribute => ("[", "]"),
            Self::PseudoClass => (":", ""),
            Self::PseudoElement => ("::", ""),
        }
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Element => "element",
            Self::Id => "id",
            Self::Class => "class",
            Self::Attribute => "attribute",
            Self::PseudoClass => "pseudo-class",
            Self::PseudoElement => "pseudo-element",
            Self::Combination => "combination",
        };
        f.write_str(name)
    }
}

/// One rendered piece of a selector, e.g. `#main`, `.container`, `::before`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fragment {
    kind: FragmentKind,
    text: String,
}

impl Fragment {
    /// Render `value` with the marks for `kind`. Attribute values are taken
    /// verbatim as the bracket contents.
    pub(crate) fn new(kind: FragmentKind, value: &str) -> Self {
        let (prefix, suffix) = kind.affixes();
        Self {
            kind,
            text: format!("{prefix}{value}{suffix}"),
        }
    }

    /// [§ 15 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
    ///
    /// `left`, then the combinator with one space on either side, then `right`.
    pub(crate) fn combination(left: &str, combinator: &str, right: &str) -> Self {
        Self {
            kind: FragmentKind::Combination,
            text: format!("{left} {combinator} {right}"),
        }
    }

    /// The kind of simple selector this fragment was built from.
    #[must_use]
    pub const fn kind(&self) -> FragmentKind {
        self.kind
    }

    /// The rendered text, including its prefix.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// [§ 15 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// [§ 15.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    Descendant,

    /// [§ 15.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    Child,

    /// [§ 15.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    NextSibling,

    /// [§ 15.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    SubsequentSibling,
}

impl Combinator {
    /// The symbol written between the two selectors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }

    /// Look up a combinator by its symbol. Exact match only; `" > "` is not `">"`.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            " " => Some(Self::Descendant),
            ">" => Some(Self::Child),
            "+" => Some(Self::NextSibling),
            "~" => Some(Self::SubsequentSibling),
            _ => None,
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_prefixes() {
        assert_eq!(Fragment::new(FragmentKind::Element, "div").text(), "div");
        assert_eq!(Fragment::new(FragmentKind::Id, "main").text(), "#main");
        assert_eq!(Fragment::new(FragmentKind::Class, "nav").text(), ".nav");
        assert_eq!(
            Fragment::new(FragmentKind::Attribute, r#"src$=".png""#).text(),
            r#"[src$=".png"]"#
        );
        assert_eq!(Fragment::new(FragmentKind::PseudoClass, "hover").text(), ":hover");
        assert_eq!(
            Fragment::new(FragmentKind::PseudoElement, "before").text(),
            "::before"
        );
    }

    #[test]
    fn test_combination_spacing() {
        let fragment = Fragment::combination("table ~ tr", " ", "td");
        assert_eq!(fragment.kind(), FragmentKind::Combination);
        assert_eq!(fragment.text(), "table ~ tr   td");
    }

    #[test]
    fn test_rank_matches_declaration_order() {
        let ranked = [
            FragmentKind::Element,
            FragmentKind::Id,
            FragmentKind::Class,
            FragmentKind::Attribute,
            FragmentKind::PseudoClass,
            FragmentKind::PseudoElement,
        ];
        for pair in ranked.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].rank() < pair[1].rank());
        }
        assert_eq!(FragmentKind::Combination.rank(), None);
    }

    #[test]
    fn test_combinator_symbols() {
        for combinator in [
            Combinator::Descendant,
            Combinator::Child,
            Combinator::NextSibling,
            Combinator::SubsequentSibling,
        ] {
            assert_eq!(Combinator::from_symbol(combinator.as_str()), Some(combinator));
        }
        assert_eq!(Combinator::from_symbol(">>"), None);
        assert_eq!(Combinator::from_symbol(""), None);
    }
}
