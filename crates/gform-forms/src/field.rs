//! The extracted field model.

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Input kind of a field, keyed by its native type token.
///
/// Each variant carries only the attributes meaningful for it: choice kinds
/// carry their allowed values, text carries its optional pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// `<input type="text">`, optionally constrained by a regex pattern.
    Text { pattern: Option<String> },
    /// `<input type="number">`.
    Number,
    /// `<input type="email">`.
    Email,
    /// `<input type="url">`.
    Url,
    /// `<textarea>`.
    Textarea,
    /// `<select>` with its non-empty option values.
    Select { values: Vec<String> },
    /// Radio group with its option values.
    Radio { values: Vec<String> },
    /// Checkbox group with its option values.
    Checkbox { values: Vec<String> },
    /// Any other native type token, possibly empty.
    Other(String),
}

impl FieldKind {
    /// Builds a kind from a native type token.
    ///
    /// `values` is kept for choice kinds and `pattern` for text; both are
    /// dropped for every other kind.
    pub fn from_token(token: &str, values: Vec<String>, pattern: Option<String>) -> Self {
        match token {
            "text" => Self::Text {
                pattern: pattern.filter(|p| !p.is_empty()),
            },
            "number" => Self::Number,
            "email" => Self::Email,
            "url" => Self::Url,
            "textarea" => Self::Textarea,
            "select" => Self::Select { values },
            "radio" => Self::Radio { values },
            "checkbox" => Self::Checkbox { values },
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the native type token.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Text { .. } => "text",
            Self::Number => "number",
            Self::Email => "email",
            Self::Url => "url",
            Self::Textarea => "textarea",
            Self::Select { .. } => "select",
            Self::Radio { .. } => "radio",
            Self::Checkbox { .. } => "checkbox",
            Self::Other(token) => token,
        }
    }

    /// Returns the allowed values for choice kinds.
    pub fn values(&self) -> Option<&[String]> {
        match self {
            Self::Select { values } | Self::Radio { values } | Self::Checkbox { values } => {
                Some(values)
            }
            _ => None,
        }
    }

    /// Returns the pattern for text fields.
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Self::Text { pattern } => pattern.as_deref(),
            _ => None,
        }
    }
}

/// One form input's profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Document-native submission key.
    pub id: String,
    /// Public name derived from the question label.
    pub name: String,
    /// Display text.
    pub label: String,
    /// Whether the field must have a value.
    pub required: bool,
    /// Input kind.
    pub kind: FieldKind,
}

impl Field {
    /// Creates a field. An empty label falls back to the name.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        label: impl Into<String>,
        kind: FieldKind,
    ) -> Self {
        let name = name.into();
        let mut label = label.into();
        if label.is_empty() {
            label.clone_from(&name);
        }
        Self {
            id: id.into(),
            name,
            label,
            required: false,
            kind,
        }
    }

    /// Makes the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Returns the native type token.
    pub fn type_name(&self) -> &str {
        self.kind.type_name()
    }

    /// Returns the allowed values for choice fields.
    pub fn values(&self) -> Option<&[String]> {
        self.kind.values()
    }

    /// Returns the pattern for text fields.
    pub fn pattern(&self) -> Option<&str> {
        self.kind.pattern()
    }
}

// Serialized as the flat profile so consumers see `type`/`values`/`pattern`
// with nulls where they do not apply.
impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Field", 7)?;
        s.serialize_field("id", &self.id)?;
        s.serialize_field("name", &self.name)?;
        s.serialize_field("label", &self.label)?;
        s.serialize_field("required", &self.required)?;
        s.serialize_field("type", self.type_name())?;
        s.serialize_field("values", &self.values())?;
        s.serialize_field("pattern", &self.pattern())?;
        s.end()
    }
}
