//! Contact Card Component
//!
//! One entry of the contact list: details, tag links, edit and delete buttons.

use leptos::prelude::*;

use crate::context::use_app;
use crate::events::Command;
use crate::models::Contact;

#[component]
pub fn ContactCard(contact: Contact) -> impl IntoView {
    let app = use_app();
    let id = contact.id;

    view! {
        <div class="contact">
            <h3>{contact.full_name}</h3>
            <dl>
                <dt>"Phone Number:"</dt>
                <dd>{contact.phone_number}</dd>
                <dt>"Email:"</dt>
                <dd>{contact.email}</dd>
                <dt>"Tags:"</dt>
                <dd class="tag-links">
                    {contact.tags.into_iter().map(|tag| {
                        let name = tag.clone();
                        view! {
                            <a
                                href="#"
                                class="tag"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    app.send(Command::SelectTag(name.clone()));
                                }
                            >
                                {tag}
                            </a>
                        }
                    }).collect_view()}
                </dd>
            </dl>
            <button class="edit-btn" on:click=move |_| app.send(Command::EditContact(id))>
                "Edit"
            </button>
            <button class="delete-btn" on:click=move |_| app.send(Command::DeleteContact(id))>
                "Delete"
            </button>
        </div>
    }
}
