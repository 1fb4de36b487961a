//! Event Handling
//!
//! Every user interaction becomes a [`Command`]; [`AppContext::dispatch`]
//! routes it to one handler. Only contact-form submission suspends.

use crate::api::{ApiResult, ContactsBackend};
use crate::context::AppContext;
use crate::models::{ContactId, FormMode};
use crate::ui::{ContactField, Dialogs};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddContact,
    EditContact(ContactId),
    DeleteContact(ContactId),
    AddTag,
    SelectTag(String),
    SearchKeyUp { key: String, value: String },
    ShowAll,
    EditField { field: ContactField, value: String },
    ToggleTag { tag: String, checked: bool },
    EditNewTag(String),
    SubmitContact,
    SubmitTag,
    CancelContactForm,
    CancelTagForm,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddContact => "add_contact",
            Command::EditContact(_) => "edit_contact",
            Command::DeleteContact(_) => "delete_contact",
            Command::AddTag => "add_tag",
            Command::SelectTag(_) => "select_tag",
            Command::SearchKeyUp { .. } => "search",
            Command::ShowAll => "show_all",
            Command::EditField { .. } => "edit_field",
            Command::ToggleTag { .. } => "toggle_tag",
            Command::EditNewTag(_) => "edit_new_tag",
            Command::SubmitContact => "submit_contact",
            Command::SubmitTag => "submit_tag",
            Command::CancelContactForm => "cancel_contact_form",
            Command::CancelTagForm => "cancel_tag_form",
        }
    }
}

/// Keys that re-run the search: printable characters, Backspace and Enter
pub fn is_search_key(key: &str) -> bool {
    key.chars().count() == 1 || key == "Backspace" || key == "Enter"
}

impl<B: ContactsBackend, D: Dialogs> AppContext<B, D> {
    pub async fn dispatch(&self, command: Command) -> ApiResult<()> {
        tracing::trace!(command = command.name(), "dispatch");
        match command {
            Command::AddContact => self.ui.borrow_mut().show_new_contact_form(),
            Command::EditContact(id) => self.edit_contact(id),
            Command::DeleteContact(id) => self.delete_contact(id),
            Command::AddTag => self.ui.borrow_mut().show_tag_form(),
            Command::SelectTag(tag) => self.select_tag(&tag),
            Command::SearchKeyUp { key, value } => self.search(&key, value),
            Command::ShowAll => self.show_all(),
            Command::EditField { field, value } => {
                self.ui.borrow_mut().contact_form_mut().set_field(field, value)
            }
            Command::ToggleTag { tag, checked } => {
                self.ui.borrow_mut().contact_form_mut().set_checked(&tag, checked)
            }
            Command::EditNewTag(value) => self.ui.borrow_mut().set_new_tag(value),
            Command::SubmitContact => return self.submit_contact().await,
            Command::SubmitTag => self.submit_tag(),
            Command::CancelContactForm => self.ui.borrow_mut().reset_contact_form(),
            Command::CancelTagForm => self.ui.borrow_mut().reset_tag_form(),
        }
        Ok(())
    }

    fn edit_contact(&self, id: ContactId) {
        let contacts = self.contacts.borrow();
        match contacts.get(id) {
            Some(contact) => self.ui.borrow_mut().show_edit_contact_form(contact),
            None => tracing::warn!(id, "edit requested for unknown contact"),
        }
    }

    fn delete_contact(&self, id: ContactId) {
        if !self.dialogs.confirm(&self.delete_prompt) {
            return;
        }
        self.api.delete(id);
        let all = self.contacts.borrow().all();
        self.ui.borrow_mut().render_contacts(all, false);
    }

    fn select_tag(&self, tag: &str) {
        let filtered = self.contacts.borrow().filter_by_tag(tag);
        self.ui.borrow_mut().render_contacts(filtered, true);
    }

    fn search(&self, key: &str, value: String) {
        let mut ui = self.ui.borrow_mut();
        ui.set_search(value);
        if !is_search_key(key) {
            return;
        }
        let filtered = self.contacts.borrow().filter_by_search(ui.search());
        let len = filtered.len();
        ui.render_contacts(filtered, true);
        ui.show_empty_filter_msg(len);
    }

    fn show_all(&self) {
        let all = self.contacts.borrow().all();
        self.ui.borrow_mut().render_contacts(all, false);
    }

    /// Awaits the create/update call; nothing guards against a second submit
    /// while the first is in flight.
    async fn submit_contact(&self) -> ApiResult<()> {
        let (mode, snapshot) = {
            let ui = self.ui.borrow();
            (ui.contact_form().mode, ui.contact_snapshot())
        };

        match mode {
            FormMode::Create => self.api.create(&snapshot).await?,
            FormMode::Edit(_) => self.api.update(&snapshot).await?,
        };

        let all = self.contacts.borrow().all();
        let mut ui = self.ui.borrow_mut();
        ui.reset_contact_form();
        ui.render_contacts(all, false);
        Ok(())
    }

    fn submit_tag(&self) {
        let name = self.ui.borrow().new_tag().to_string();
        if name.trim().is_empty() {
            return;
        }

        let mut contacts = self.contacts.borrow_mut();
        contacts.register_tags([&name]);
        let mut ui = self.ui.borrow_mut();
        ui.reset_tag_form();
        ui.render_tags(contacts.tags());
    }
}
