//! The tree-walk seam between the selector engine and an HTML parser.

use scraper::ElementRef;

/// An element handle in a parsed document.
///
/// Handles are cheap to copy and borrow from the document for `'a`. The
/// engine only needs three capabilities: the tag name, attribute lookup and a
/// document-order walk over every element below the handle.
pub trait DomElement<'a>: Copy + 'a {
    /// Returns the element's tag name as stored by the parser.
    fn tag_name(self) -> &'a str;

    /// Returns the value of an attribute, if present.
    fn attribute(self, name: &str) -> Option<&'a str>;

    /// Returns every element descendant in document order, excluding `self`.
    fn descendant_elements(self) -> impl Iterator<Item = Self> + 'a;
}

impl<'a> DomElement<'a> for ElementRef<'a> {
    fn tag_name(self) -> &'a str {
        self.value().name()
    }

    fn attribute(self, name: &str) -> Option<&'a str> {
        self.value().attr(name)
    }

    fn descendant_elements(self) -> impl Iterator<Item = Self> + 'a {
        self.descendants().skip(1).filter_map(ElementRef::wrap)
    }
}
