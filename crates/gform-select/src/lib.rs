//! # gform-select
//!
//! A minimal CSS-subset selector engine for querying parsed HTML documents.
//!
//! Supported syntax:
//! - comma-separated alternatives (`input, textarea, select`)
//! - descendant chains separated by whitespace (`div.question label`)
//! - per step: an optional tag (`*` or omitted is the wildcard), an optional
//!   `#id`, any number of `.class` tokens and `[attr=value]` exact tests
//!
//! There are no child/sibling combinators and no pseudo-classes.
//!
//! ## Quick Start
//!
//! ```rust
//! use gform_select::query_selector_all;
//! use scraper::Html;
//!
//! let doc = Html::parse_document(
//!     r#"<div class="ss-form-question"><label class="ss-q-item-label">Email</label></div>"#,
//! );
//! let labels = query_selector_all(
//!     "div.ss-form-question label.ss-q-item-label",
//!     &[doc.root_element()],
//! );
//! assert_eq!(labels.len(), 1);
//! ```
//!
//! ## Matching rules
//!
//! Class tokens are matched as substrings of the `class` attribute, so `.ss-q`
//! also matches an element classed `ss-q-item`. Attribute tests compare the
//! attribute value exactly; a missing attribute compares as the empty string.
//! Results are not deduplicated: overlapping roots and repeated alternatives
//! yield repeated elements.
//!
//! Any tree can be queried by implementing [`DomElement`]; an implementation
//! for [`scraper::ElementRef`] is provided.

mod dom;
mod error;
mod matcher;
mod parser;
mod selector;

pub use dom::DomElement;
pub use error::{Result, SelectorError};
pub use matcher::{match_chain, match_compound, query_selector, query_selector_all};
pub use selector::{Chain, Compound, Selector};
