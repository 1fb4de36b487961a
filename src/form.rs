//! Form Serialization
//!
//! Flattens submitted form entries into the JSON body the API expects.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::ContactId;

/// Key/value view of one form submission.
///
/// Repeated keys (one per checked tag box) are joined with commas.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct FormSnapshot {
    fields: Map<String, Value>,
}

impl FormSnapshot {
    /// Build a contact snapshot. `tags` is sent as `null` when no box was checked.
    pub fn from_entries<I, K, V>(entries: I, id: Option<ContactId>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut fields = Map::new();
        for (key, value) in entries {
            let key = key.into();
            let value = value.as_ref();
            match fields.get_mut(&key) {
                Some(Value::String(existing)) if !existing.is_empty() => {
                    existing.push(',');
                    existing.push_str(value);
                }
                _ => {
                    fields.insert(key, Value::String(value.to_string()));
                }
            }
        }

        if let Some(id) = id {
            fields.insert("id".to_string(), Value::String(id.to_string()));
        }
        if !fields.contains_key("tags") {
            fields.insert("tags".to_string(), Value::Null);
        }

        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn id(&self) -> Option<ContactId> {
        self.get("id").and_then(|id| id.parse().ok())
    }

    pub fn to_json(&self) -> String {
        Value::Object(self.fields.clone()).to_string()
    }
}
