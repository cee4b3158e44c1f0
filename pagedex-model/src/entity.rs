use crate::{Error, Result};
use pagedex_types::{ItemKey, Keyed};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A generic remote record cached by key.
///
/// The `data` field holds the raw payload as delivered by the remote
/// collection; the cache never looks inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub key: ItemKey,
    pub data: Value,
}

impl Entity {
    /// Creates an entity from a key and payload.
    #[must_use]
    pub fn new(key: impl Into<ItemKey>, data: Value) -> Self {
        Self {
            key: key.into(),
            data,
        }
    }

    /// Builds an entity from a raw payload, extracting the identifier
    /// from the top-level `key_field`.
    ///
    /// A payload without a usable identifier is a caller contract
    /// violation: [`Error::MissingKey`] when the field is absent,
    /// [`Error::InvalidKey`] when it is not an integer or string scalar.
    pub fn from_value(data: Value, key_field: &str) -> Result<Self> {
        let raw = data
            .get(key_field)
            .ok_or_else(|| Error::MissingKey(key_field.to_string()))?;

        let key = match raw {
            Value::Number(n) => n
                .as_i64()
                .map(ItemKey::from)
                .ok_or_else(|| Error::InvalidKey(key_field.to_string()))?,
            Value::String(s) => ItemKey::from(s.clone()),
            _ => return Err(Error::InvalidKey(key_field.to_string())),
        };

        Ok(Self { key, data })
    }

    /// Extract a string value from `data` using a JSON pointer (e.g., "/title").
    #[must_use]
    pub fn get_str(&self, pointer: &str) -> Option<&str> {
        self.data.pointer(pointer).and_then(|v| v.as_str())
    }

    /// Extract a boolean value from `data` using a JSON pointer.
    #[must_use]
    pub fn get_bool(&self, pointer: &str) -> Option<bool> {
        self.data.pointer(pointer).and_then(|v| v.as_bool())
    }

    /// Extract a numeric value from `data` using a JSON pointer.
    #[must_use]
    pub fn get_number(&self, pointer: &str) -> Option<f64> {
        self.data.pointer(pointer).and_then(|v| v.as_f64())
    }
}

impl Keyed for Entity {
    fn key(&self) -> ItemKey {
        self.key.clone()
    }
}
