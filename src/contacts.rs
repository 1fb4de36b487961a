//! Contacts Store
//!
//! In-memory contact list and tag registry. No I/O happens here.

use crate::models::{Contact, ContactId};

/// Client-side source of truth for rendering
#[derive(Clone, Debug, Default)]
pub struct ContactsManager {
    contacts: Vec<Contact>,
    /// Every tag seen this session, in order of first appearance
    tags: Vec<String>,
}

impl ContactsManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_all(&mut self, contacts: Vec<Contact>) {
        self.contacts = contacts;
    }

    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn all(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    pub fn tags(&self) -> Vec<String> {
        self.tags.clone()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Union `tags` into the registry. The registry never shrinks.
    pub fn register_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            let tag = tag.as_ref();
            if !self.tags.iter().any(|t| t == tag) {
                self.tags.push(tag.to_string());
            }
        }
    }

    /// Case-insensitive substring match on the full name; input is trimmed.
    pub fn filter_by_search(&self, text: &str) -> Vec<Contact> {
        let needle = text.trim().to_lowercase();
        self.contacts
            .iter()
            .filter(|c| c.full_name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub fn filter_by_tag(&self, tag: &str) -> Vec<Contact> {
        self.contacts
            .iter()
            .filter(|c| c.has_tag(tag))
            .cloned()
            .collect()
    }

    /// Returns `false` (and changes nothing) when no contact has `id`.
    pub fn remove(&mut self, id: ContactId) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|c| c.id != id);
        self.contacts.len() != before
    }

    pub fn add(&mut self, contact: Contact) {
        self.register_tags(&contact.tags);
        self.contacts.push(contact);
    }

    /// Swap in the server's version of a contact. Tags are registered even
    /// when the id is unknown; the list is then left untouched.
    pub fn replace(&mut self, contact: Contact) -> bool {
        self.register_tags(&contact.tags);
        match self.contacts.iter_mut().find(|c| c.id == contact.id) {
            Some(slot) => {
                *slot = contact;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_contact(id: ContactId, name: &str, tags: &[&str]) -> Contact {
        Contact {
            id,
            full_name: name.to_string(),
            email: format!("{}@example.com", id),
            phone_number: "555-0100".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn sample() -> ContactsManager {
        let mut manager = ContactsManager::new();
        manager.replace_all(vec![
            make_contact(1, "Alice Smith", &["friend"]),
            make_contact(2, "Bob Jones", &["work"]),
            make_contact(3, "alicia Keys", &["friend", "music"]),
        ]);
        manager
    }

    #[test]
    fn test_filter_by_search_is_case_insensitive_and_trimmed() {
        let manager = sample();
        let ids: Vec<_> = manager.filter_by_search("  ALIC ").iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_filter_by_empty_search_returns_all() {
        let manager = sample();
        assert_eq!(manager.filter_by_search(""), manager.all());
        assert_eq!(manager.filter_by_search("   ").len(), 3);
    }

    #[test]
    fn test_filter_by_tag_is_exact() {
        let manager = sample();
        let ids: Vec<_> = manager.filter_by_tag("friend").iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(manager.filter_by_tag("Friend").is_empty());
        assert!(manager.filter_by_tag("fri").is_empty());
    }

    #[test]
    fn test_register_tags_is_idempotent_and_ordered() {
        let mut manager = ContactsManager::new();
        manager.register_tags(["work", "friend"]);
        manager.register_tags(["friend", "work", "gym"]);
        assert_eq!(manager.tags(), vec!["work", "friend", "gym"]);
    }

    #[test]
    fn test_remove_only_matching_contact() {
        let mut manager = sample();
        assert!(manager.remove(2));
        let ids: Vec<_> = manager.all().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut manager = sample();
        assert!(!manager.remove(42));
        assert_eq!(manager.len(), 3);
    }

    #[test]
    fn test_add_registers_tags() {
        let mut manager = ContactsManager::new();
        manager.add(make_contact(9, "Zed", &["gym", "work"]));
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.tags(), vec!["gym", "work"]);
    }

    #[test]
    fn test_replace_swaps_whole_record() {
        let mut manager = sample();
        let edited = make_contact(2, "Robert Jones", &["work", "golf"]);
        assert!(manager.replace(edited.clone()));
        assert_eq!(manager.get(2), Some(&edited));
        assert!(manager.tags().contains(&"golf".to_string()));
    }

    #[test]
    fn test_replace_unknown_id_keeps_list() {
        let mut manager = sample();
        assert!(!manager.replace(make_contact(77, "Ghost", &["spooky"])));
        assert_eq!(manager.len(), 3);
        assert!(manager.get(77).is_none());
        assert!(manager.tags().contains(&"spooky".to_string()));
    }

    #[test]
    fn test_registry_keeps_tags_of_removed_contacts() {
        let mut manager = ContactsManager::new();
        manager.add(make_contact(1, "Solo", &["lonely"]));
        manager.remove(1);
        assert!(manager.is_empty());
        assert_eq!(manager.tags(), vec!["lonely"]);
    }

    #[test]
    fn test_all_is_a_copy() {
        let manager = sample();
        let mut copy = manager.all();
        copy.clear();
        assert_eq!(manager.len(), 3);
    }
}
