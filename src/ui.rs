//! UI State
//!
//! Everything the views render, kept as plain data. Exactly one panel is
//! visible at a time.

use crate::form::FormSnapshot;
use crate::models::{Contact, FormMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    /// Search bar, contact cards and the empty-state messages
    #[default]
    Contacts,
    ContactForm,
    TagForm,
}

/// Text inputs of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    FullName,
    Email,
    PhoneNumber,
}

impl ContactField {
    pub fn name(&self) -> &'static str {
        match self {
            ContactField::FullName => "full_name",
            ContactField::Email => "email",
            ContactField::PhoneNumber => "phone_number",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactForm {
    pub mode: FormMode,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    /// Checked tag boxes, in click order
    pub checked_tags: Vec<String>,
}

impl ContactForm {
    pub fn heading(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Create Contact",
            FormMode::Edit(_) => "Edit Contact",
        }
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::FullName => &self.full_name,
            ContactField::Email => &self.email,
            ContactField::PhoneNumber => &self.phone_number,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::FullName => self.full_name = value,
            ContactField::Email => self.email = value,
            ContactField::PhoneNumber => self.phone_number = value,
        }
    }

    pub fn is_checked(&self, tag: &str) -> bool {
        self.checked_tags.iter().any(|t| t == tag)
    }

    pub fn set_checked(&mut self, tag: &str, checked: bool) {
        if checked {
            if !self.is_checked(tag) {
                self.checked_tags.push(tag.to_string());
            }
        } else {
            self.checked_tags.retain(|t| t != tag);
        }
    }

    /// Serialize the form the way a browser submission would: one entry per
    /// field, then one `tags` entry per checked box in checklist order.
    pub fn snapshot(&self, tag_options: &[String]) -> FormSnapshot {
        let fields = [ContactField::FullName, ContactField::Email, ContactField::PhoneNumber]
            .into_iter()
            .map(|f| (f.name(), self.field(f)));
        let tags = tag_options
            .iter()
            .filter(|t| self.is_checked(t))
            .map(|t| ("tags", t.as_str()));
        FormSnapshot::from_entries(fields.chain(tags), self.mode.contact_id())
    }

    fn populate(&mut self, contact: &Contact) {
        self.mode = FormMode::Edit(contact.id);
        self.full_name = contact.full_name.clone();
        self.email = contact.email.clone();
        self.phone_number = contact.phone_number.clone();
        self.checked_tags = contact.tags.clone();
    }
}

/// What the contact list area currently shows
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactList {
    pub cards: Vec<Contact>,
    /// "There are no contacts" message; hides the list while shown
    pub show_empty_contacts: bool,
    /// Search text echoed by the "no contacts match" message
    pub empty_filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiManager {
    panel: Panel,
    list: ContactList,
    form: ContactForm,
    /// Tag names rendered as checkboxes in the contact form
    tag_options: Vec<String>,
    new_tag: String,
    search: String,
}

impl UiManager {
    pub fn new() -> Self {
        Self {
            list: ContactList {
                show_empty_contacts: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn list(&self) -> &ContactList {
        &self.list
    }

    pub fn contact_form(&self) -> &ContactForm {
        &self.form
    }

    pub fn contact_form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    /// Snapshot of the contact form as rendered, checklist included
    pub fn contact_snapshot(&self) -> FormSnapshot {
        self.form.snapshot(&self.tag_options)
    }

    pub fn tag_options(&self) -> &[String] {
        &self.tag_options
    }

    pub fn new_tag(&self) -> &str {
        &self.new_tag
    }

    pub fn set_new_tag(&mut self, value: String) {
        self.new_tag = value;
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, value: String) {
        self.search = value;
    }

    fn show(&mut self, panel: Panel) {
        self.panel = panel;
    }

    pub fn show_default_display(&mut self) {
        self.show(Panel::Contacts);
        self.list.show_empty_contacts = self.list.cards.is_empty();
    }

    /// Replace the cards. An empty unfiltered list shows the "no contacts"
    /// state instead; an empty filtered list still shows the (empty) list.
    pub fn render_contacts(&mut self, contacts: Vec<Contact>, is_filter: bool) {
        if !is_filter {
            self.list.empty_filter = None;
        }
        self.list.show_empty_contacts = contacts.is_empty() && !is_filter;
        self.list.cards = contacts;
    }

    /// Re-render the checklist; when editing, boxes for the contact's tags stay checked.
    pub fn render_tags(&mut self, tags: Vec<String>) {
        self.tag_options = tags;
        let options = &self.tag_options;
        self.form.checked_tags.retain(|t| options.contains(t));
    }

    pub fn show_empty_filter_msg(&mut self, filtered_len: usize) {
        self.list.empty_filter = (filtered_len == 0).then(|| self.search.clone());
    }

    pub fn show_new_contact_form(&mut self) {
        self.show(Panel::ContactForm);
        self.form = ContactForm::default();
    }

    pub fn show_edit_contact_form(&mut self, contact: &Contact) {
        self.show(Panel::ContactForm);
        self.form = ContactForm::default();
        self.form.populate(contact);
    }

    pub fn show_tag_form(&mut self) {
        self.show(Panel::TagForm);
    }

    pub fn reset_contact_form(&mut self) {
        self.form = ContactForm::default();
        self.show_default_display();
    }

    /// The tag form is opened from inside the contact form, so closing it
    /// goes back there with the contact form untouched.
    pub fn reset_tag_form(&mut self) {
        self.new_tag.clear();
        self.show(Panel::ContactForm);
    }
}

/// Blocking browser prompts
pub trait Dialogs {
    fn confirm(&self, message: &str) -> bool;
}

pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_contact(id: u32, name: &str, tags: &[&str]) -> Contact {
        Contact {
            id,
            full_name: name.to_string(),
            email: "e@x.io".to_string(),
            phone_number: "1".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_starts_on_empty_contacts_view() {
        let ui = UiManager::new();
        assert_eq!(ui.panel(), Panel::Contacts);
        assert!(ui.list().show_empty_contacts);
    }

    #[test]
    fn test_render_empty_unfiltered_shows_empty_state() {
        let mut ui = UiManager::new();
        ui.render_contacts(vec![make_contact(1, "A", &[])], false);
        assert!(!ui.list().show_empty_contacts);

        ui.render_contacts(vec![], false);
        assert!(ui.list().show_empty_contacts);
        assert!(ui.list().cards.is_empty());
    }

    #[test]
    fn test_render_empty_filtered_keeps_list_visible() {
        let mut ui = UiManager::new();
        ui.render_contacts(vec![make_contact(1, "A", &[])], false);
        ui.render_contacts(vec![], true);
        assert!(!ui.list().show_empty_contacts);
        assert!(ui.list().cards.is_empty());
    }

    #[test]
    fn test_empty_filter_message_echoes_search() {
        let mut ui = UiManager::new();
        ui.set_search("zzz".to_string());
        ui.show_empty_filter_msg(0);
        assert_eq!(ui.list().empty_filter.as_deref(), Some("zzz"));

        ui.show_empty_filter_msg(2);
        assert_eq!(ui.list().empty_filter, None);
    }

    #[test]
    fn test_unfiltered_render_clears_filter_message() {
        let mut ui = UiManager::new();
        ui.set_search("q".to_string());
        ui.show_empty_filter_msg(0);
        ui.render_contacts(vec![make_contact(1, "A", &[])], false);
        assert_eq!(ui.list().empty_filter, None);
    }

    #[test]
    fn test_new_form_is_blank_create_mode() {
        let mut ui = UiManager::new();
        ui.show_edit_contact_form(&make_contact(5, "Eve", &["x"]));
        ui.show_new_contact_form();
        assert_eq!(ui.panel(), Panel::ContactForm);
        assert_eq!(ui.contact_form().mode, FormMode::Create);
        assert_eq!(ui.contact_form().heading(), "Create Contact");
        assert!(ui.contact_form().full_name.is_empty());
        assert!(ui.contact_form().checked_tags.is_empty());
    }

    #[test]
    fn test_edit_form_is_populated() {
        let mut ui = UiManager::new();
        ui.render_tags(vec!["x".to_string(), "y".to_string()]);
        ui.show_edit_contact_form(&make_contact(5, "Eve", &["y"]));

        let form = ui.contact_form();
        assert_eq!(form.mode, FormMode::Edit(5));
        assert_eq!(form.heading(), "Edit Contact");
        assert_eq!(form.full_name, "Eve");
        assert!(form.is_checked("y"));
        assert!(!form.is_checked("x"));
    }

    #[test]
    fn test_render_tags_keeps_edit_checks() {
        let mut ui = UiManager::new();
        ui.render_tags(vec!["x".to_string()]);
        ui.show_edit_contact_form(&make_contact(5, "Eve", &["x"]));
        ui.render_tags(vec!["x".to_string(), "new".to_string()]);
        assert!(ui.contact_form().is_checked("x"));
        assert!(!ui.contact_form().is_checked("new"));
        assert_eq!(ui.tag_options(), ["x", "new"]);
    }

    #[test]
    fn test_reset_contact_form_returns_to_default_display() {
        let mut ui = UiManager::new();
        ui.render_contacts(vec![make_contact(1, "A", &[])], false);
        ui.show_edit_contact_form(&make_contact(1, "A", &[]));
        ui.reset_contact_form();
        assert_eq!(ui.panel(), Panel::Contacts);
        assert_eq!(ui.contact_form().mode, FormMode::Create);
        assert!(!ui.list().show_empty_contacts);
    }

    #[test]
    fn test_reset_tag_form_returns_to_contact_form() {
        let mut ui = UiManager::new();
        ui.show_new_contact_form();
        ui.contact_form_mut().set_field(ContactField::FullName, "Kim".to_string());
        ui.show_tag_form();
        ui.set_new_tag("vip".to_string());
        ui.reset_tag_form();
        assert_eq!(ui.panel(), Panel::ContactForm);
        assert!(ui.new_tag().is_empty());
        assert_eq!(ui.contact_form().full_name, "Kim");
    }

    fn options(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_form_snapshot_joins_checked_tags() {
        let tags = options(&["a", "b"]);
        let mut form = ContactForm::default();
        form.set_field(ContactField::FullName, "Kim".to_string());
        form.set_checked("a", true);
        form.set_checked("b", true);
        form.set_checked("a", true);
        let snapshot = form.snapshot(&tags);
        assert_eq!(snapshot.get("full_name"), Some("Kim"));
        assert_eq!(snapshot.get("tags"), Some("a,b"));
        assert_eq!(snapshot.id(), None);

        form.set_checked("a", false);
        assert_eq!(form.snapshot(&tags).get("tags"), Some("b"));
    }

    #[test]
    fn test_snapshot_tags_follow_checklist_order() {
        let mut ui = UiManager::new();
        ui.render_tags(options(&["friend", "work"]));
        ui.show_new_contact_form();
        ui.contact_form_mut().set_checked("work", true);
        ui.contact_form_mut().set_checked("friend", true);
        assert_eq!(ui.contact_snapshot().get("tags"), Some("friend,work"));
    }

    #[test]
    fn test_edit_snapshot_uses_checklist_order_not_contact_order() {
        let mut ui = UiManager::new();
        ui.render_tags(options(&["friend", "gym", "work"]));
        ui.show_edit_contact_form(&make_contact(4, "Mo", &["work", "friend"]));
        assert_eq!(ui.contact_snapshot().get("tags"), Some("friend,work"));
    }

    #[test]
    fn test_edit_snapshot_includes_id() {
        let mut form = ContactForm::default();
        form.populate(&make_contact(9, "Lu", &[]));
        let snapshot = form.snapshot(&[]);
        assert_eq!(snapshot.id(), Some(9));
        assert_eq!(snapshot.get("tags"), None);
    }
}
