//! Submitted values and their translation into submission parameters.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::field::Field;

/// A submitted value: a single string or, for checkbox groups, a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// One value.
    Single(String),
    /// Several values.
    Multiple(Vec<String>),
}

impl FieldValue {
    /// Returns true for an empty string or an empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(v) => v.is_empty(),
            Self::Multiple(vs) => vs.is_empty(),
        }
    }

    /// Returns the value if it is a single string.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(v) => Some(v),
            Self::Multiple(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Multiple(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multiple(values)
    }
}

/// Caller values keyed by field name.
pub type Values = BTreeMap<String, FieldValue>;

/// Submission parameters keyed by field id.
pub type Params = BTreeMap<String, FieldValue>;

/// Lookup from public field name to document field id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    ids: HashMap<String, String>,
}

impl FieldMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map from fields. A repeated name keeps the last id.
    pub fn from_fields(fields: &[Field]) -> Self {
        let mut map = Self::new();
        for field in fields {
            map.insert(&field.name, &field.id);
        }
        map
    }

    /// Maps `name` to `id`, replacing any previous id.
    pub fn insert(&mut self, name: impl Into<String>, id: impl Into<String>) {
        self.ids.insert(name.into(), id.into());
    }

    /// Returns the id for a name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.ids.get(name).map(String::as_str)
    }

    /// Returns the number of names.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates over `(name, id)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.ids.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<N: Into<String>, I: Into<String>> FromIterator<(N, I)> for FieldMap {
    fn from_iter<T: IntoIterator<Item = (N, I)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (name, id) in iter {
            map.insert(name, id);
        }
        map
    }
}

/// Translates name-keyed values into id-keyed parameters.
///
/// Names missing from `map` are dropped.
///
/// # Example
///
/// ```
/// use gform_forms::{to_id_keyed, FieldMap, FieldValue, Values};
///
/// let map: FieldMap = [("email", "entry.1")].into_iter().collect();
/// let mut values = Values::new();
/// values.insert("email".into(), "a@b.com".into());
/// values.insert("foo".into(), "bar".into());
///
/// let params = to_id_keyed(&values, &map);
/// assert_eq!(params.len(), 1);
/// assert_eq!(params["entry.1"], FieldValue::from("a@b.com"));
/// ```
pub fn to_id_keyed(submitted: &Values, map: &FieldMap) -> Params {
    let mut params = Params::new();
    for (name, value) in submitted {
        match map.get(name) {
            Some(id) => {
                params.insert(id.to_string(), value.clone());
            }
            None => debug!(name = %name, "dropping value for unknown field"),
        }
    }
    params
}

/// Encodes parameters as an `application/x-www-form-urlencoded` body.
///
/// List values become repeated keys (`k=a&k=b`), never indexed keys.
pub fn encode_params(params: &Params) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        match value {
            FieldValue::Single(v) => {
                serializer.append_pair(key, v);
            }
            FieldValue::Multiple(vs) => {
                for v in vs {
                    serializer.append_pair(key, v);
                }
            }
        }
    }
    serializer.finish()
}
