//! UI Components
//!
//! Leptos views over the UI state.

mod contact_card;
mod contact_form;
mod contacts_panel;
mod tag_form;

pub use contact_card::ContactCard;
pub use contact_form::ContactFormPanel;
pub use contacts_panel::ContactsPanel;
pub use tag_form::TagFormPanel;
