//! Selector matching against a DOM tree.

use tracing::warn;

use crate::dom::DomElement;
use crate::selector::{Chain, Compound, Selector};

/// Matches a single compound below every root, in root order.
///
/// Each root contributes its matching descendants in document order. Roots
/// that overlap contribute the same element more than once.
#[must_use]
pub fn match_compound<'a, E: DomElement<'a>>(compound: &Compound, roots: &[E]) -> Vec<E> {
    roots
        .iter()
        .flat_map(|root| root.descendant_elements())
        .filter(|element| compound.matches(*element))
        .collect()
}

/// Matches a descendant chain by threading the matched set through each step.
#[must_use]
pub fn match_chain<'a, E: DomElement<'a>>(chain: &Chain, roots: &[E]) -> Vec<E> {
    let mut current = roots.to_vec();
    for step in &chain.steps {
        if current.is_empty() {
            break;
        }
        current = match_compound(step, &current);
    }
    current
}

/// Parses `selector` and matches it below `roots`.
///
/// Blank or malformed selectors match nothing; the parse error is logged.
#[must_use]
pub fn query_selector_all<'a, E: DomElement<'a>>(selector: &str, roots: &[E]) -> Vec<E> {
    if selector.trim().is_empty() {
        return Vec::new();
    }
    match Selector::parse(selector) {
        Ok(parsed) => parsed.select(roots),
        Err(err) => {
            warn!(selector, error = %err, "unparsable selector");
            Vec::new()
        }
    }
}

/// Returns the first match of `selector` below `roots`.
#[must_use]
pub fn query_selector<'a, E: DomElement<'a>>(selector: &str, roots: &[E]) -> Option<E> {
    query_selector_all(selector, roots).into_iter().next()
}
