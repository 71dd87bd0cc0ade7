//! Client options and their typed accessors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{FormError, Result};

/// Options forwarded to the transport on every fetch and submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Extra request headers.
    pub headers: BTreeMap<String, String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: 30,
            headers: BTreeMap::new(),
        }
    }
}

impl ClientOptions {
    /// Creates the default option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of one option.
    ///
    /// # Example
    ///
    /// ```
    /// use gform_forms::ClientOptions;
    /// use serde_json::json;
    ///
    /// let options = ClientOptions::new();
    /// assert_eq!(options.get("timeout"), Some(json!(30)));
    /// assert_eq!(options.get("nope"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(mut map)) => map.remove(key),
            _ => None,
        }
    }

    /// Sets one option.
    ///
    /// When both the current and the new value are objects the new entries
    /// are merged into the current ones; otherwise the value is replaced.
    pub fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let Value::Object(mut current) = serde_json::to_value(&*self)? else {
            return Err(FormError::InvalidOption {
                key: key.to_string(),
                message: "options did not serialize to an object".to_string(),
            });
        };

        let slot = current
            .get_mut(key)
            .ok_or_else(|| FormError::UnknownOption(key.to_string()))?;

        match (slot, value) {
            (Value::Object(old), Value::Object(new)) => old.extend(new),
            (slot, value) => *slot = value,
        }

        *self = serde_json::from_value(Value::Object(current)).map_err(|err| {
            FormError::InvalidOption {
                key: key.to_string(),
                message: err.to_string(),
            }
        })?;
        Ok(())
    }

    /// Sets every entry of `partial` in order, stopping at the first error.
    ///
    /// Entries applied before a failing one stay applied.
    pub fn merge(&mut self, partial: Map<String, Value>) -> Result<()> {
        for (key, value) in partial {
            self.set(&key, value)?;
        }
        Ok(())
    }
}
