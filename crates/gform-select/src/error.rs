//! Selector parse errors.

use thiserror::Error;

/// Errors produced while parsing a selector string.
///
/// Positions are byte offsets into the compound (one descendant step) being
/// parsed, not into the whole selector string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// The selector is blank or holds only blank alternatives.
    #[error("empty selector")]
    Empty,

    /// A character that cannot start any selector component.
    #[error("unexpected character '{ch}' at {pos} in '{compound}'")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Byte offset within the compound.
        pos: usize,
        /// The compound being parsed.
        compound: String,
    },

    /// `#` or `.` not followed by an identifier.
    #[error("expected identifier after '{prefix}' at {pos} in '{compound}'")]
    MissingIdentifier {
        /// The prefix character (`#` or `.`).
        prefix: char,
        /// Byte offset within the compound.
        pos: usize,
        /// The compound being parsed.
        compound: String,
    },

    /// An attribute test without a closing `]`.
    #[error("unterminated attribute test in '{0}'")]
    UnterminatedAttribute(String),

    /// An attribute test without `=value`.
    #[error("attribute test '{name}' has no value in '{compound}'")]
    MissingAttributeValue {
        /// The attribute name.
        name: String,
        /// The compound being parsed.
        compound: String,
    },
}

/// Result type alias for selector parsing.
pub type Result<T> = std::result::Result<T, SelectorError>;
