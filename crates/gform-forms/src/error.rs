//! Error types for form loading and validation.

use std::fmt;

use thiserror::Error;

/// Form-client errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// The document has no `form` element, so nothing can be extracted.
    #[error("no form element found in document")]
    MissingForm,

    /// An operation needed a loaded document.
    #[error("no form document loaded")]
    NotLoaded,

    /// Option key does not exist.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// Option value has the wrong shape for its key.
    #[error("invalid value for option {key}: {message}")]
    InvalidOption { key: String, message: String },

    /// The transport failed to fetch or submit.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// JSON conversion error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// An error reported by a [`Transport`](crate::Transport) implementation.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    /// Creates a transport error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a transport error wrapping an underlying cause.
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorReason {
    /// A required field had no value.
    Empty,
    /// The value failed its type, pattern or membership check.
    InvalidValue,
}

impl fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::InvalidValue => f.write_str("Invalid value"),
        }
    }
}

/// A validation failure for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Public name of the field.
    pub name: String,
    /// Failure reason.
    pub reason: ErrorReason,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.reason)
    }
}

/// Ordered collection of validation errors, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an error for a field.
    pub fn add(&mut self, name: &str, reason: ErrorReason) {
        self.errors.push(FieldError {
            name: name.to_string(),
            reason,
        });
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the errors in order.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns the reasons recorded for a field.
    pub fn get(&self, name: &str) -> Vec<ErrorReason> {
        self.errors
            .iter()
            .filter(|e| e.name == name)
            .map(|e| e.reason)
            .collect()
    }

    /// Returns every error as a `"<name>: <reason>"` message.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
