//! Frontend Models
//!
//! Data structures matching the contacts REST API.

use serde::{Deserialize, Serialize};

/// Server-assigned contact identifier
pub type ContactId = u32;

/// Contact as sent by the backend (tags are one comma-joined string)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub id: ContactId,
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub tags: Option<String>,
}

/// Contact as held by the client
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub tags: Vec<String>,
}

impl Contact {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl From<ContactRecord> for Contact {
    fn from(record: ContactRecord) -> Self {
        Self {
            id: record.id,
            full_name: record.full_name,
            email: record.email,
            phone_number: record.phone_number,
            tags: split_tags(record.tags.as_deref()),
        }
    }
}

/// Split a comma-joined tag string. `None` and `""` both mean no tags.
pub fn split_tags(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(s) if !s.is_empty() => s.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

/// Whether the contact form creates a new contact or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(ContactId),
}

impl FormMode {
    pub fn contact_id(&self) -> Option<ContactId> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(*id),
        }
    }
}
