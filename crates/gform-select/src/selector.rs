//! Parsed selector representation.

use std::collections::HashMap;
use std::fmt;

use crate::dom::DomElement;
use crate::error::Result;
use crate::parser;

/// A single selector step: `tag#id.class[attr=value]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compound {
    /// Tag name; `None` is the wildcard.
    pub tag: Option<String>,
    /// Required `id` attribute value.
    pub id: Option<String>,
    /// Class tokens, each tested as a substring of the `class` attribute.
    pub classes: Vec<String>,
    /// Exact attribute tests. Keyed by attribute name, so a repeated name keeps
    /// only its last value.
    pub attributes: HashMap<String, String>,
}

impl Compound {
    /// Returns true if the element satisfies every predicate of this step.
    #[must_use]
    pub fn matches<'a, E: DomElement<'a>>(&self, element: E) -> bool {
        if let Some(tag) = &self.tag {
            if !element.tag_name().eq_ignore_ascii_case(tag) {
                return false;
            }
        }

        if let Some(id) = &self.id {
            if element.attribute("id") != Some(id.as_str()) {
                return false;
            }
        }

        let class_attr = element.attribute("class").unwrap_or("");
        if !self.classes.iter().all(|class| class_attr.contains(class.as_str())) {
            return false;
        }

        self.attributes
            .iter()
            .all(|(name, value)| element.attribute(name).unwrap_or("") == value)
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag.as_deref().unwrap_or("*"))?;
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        let mut attrs: Vec<_> = self.attributes.iter().collect();
        attrs.sort();
        for (name, value) in attrs {
            write!(f, "[{name}={value}]")?;
        }
        Ok(())
    }
}

/// A descendant chain: `a b c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    /// Steps from outermost to innermost.
    pub steps: Vec<Compound>,
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

/// A parsed selector: a comma-separated union of descendant chains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// Alternatives in source order.
    pub alternatives: Vec<Chain>,
}

impl Selector {
    /// Parses a selector string.
    ///
    /// Blank alternatives are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::Empty`](crate::SelectorError::Empty) when no
    /// alternative is left, or the first scan error of a malformed compound.
    ///
    /// # Example
    ///
    /// ```
    /// use gform_select::Selector;
    ///
    /// let sel = Selector::parse("div.ss-form-question label.ss-q-item-label").unwrap();
    /// assert_eq!(sel.alternatives.len(), 1);
    /// assert_eq!(sel.alternatives[0].steps.len(), 2);
    /// assert!(Selector::parse("   ").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        parser::parse_selector(input)
    }

    /// Matches this selector below each root and returns the matches.
    ///
    /// Alternatives are evaluated left to right and their results
    /// concatenated without deduplication.
    #[must_use]
    pub fn select<'a, E: DomElement<'a>>(&self, roots: &[E]) -> Vec<E> {
        self.alternatives
            .iter()
            .flat_map(|chain| crate::matcher::match_chain(chain, roots))
            .collect()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chain) in self.alternatives.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{chain}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Selector {
    type Err = crate::error::SelectorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
