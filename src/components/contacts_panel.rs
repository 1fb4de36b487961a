//! Contacts Panel Component
//!
//! Control bar (add, search, show all), empty-state messages and the card list.

use leptos::prelude::*;

use crate::components::ContactCard;
use crate::context::use_app;
use crate::events::Command;
use crate::ui::Panel;

#[component]
pub fn ContactsPanel() -> impl IntoView {
    let app = use_app();

    let visible = move || app.with_ui(|ui| ui.panel() == Panel::Contacts);
    let show_empty = move || app.with_ui(|ui| ui.list().show_empty_contacts);
    let empty_filter = move || app.with_ui(|ui| ui.list().empty_filter.clone());
    let cards = move || app.with_ui(|ui| ui.list().cards.clone());

    view! {
        <section id="contacts-view" class:hide=move || !visible()>
            <div id="contacts-control" class="contacts-control">
                <button class="add-contact-btn" on:click=move |_| app.send(Command::AddContact)>
                    "Add Contact"
                </button>
                <input
                    id="search"
                    type="search"
                    placeholder="Search by name..."
                    prop:value=move || app.with_ui(|ui| ui.search().to_string())
                    on:keyup=move |ev: web_sys::KeyboardEvent| {
                        app.send(Command::SearchKeyUp {
                            key: ev.key(),
                            value: event_target_value(&ev),
                        });
                    }
                />
                <button id="show-contacts-btn" on:click=move |_| app.send(Command::ShowAll)>
                    "Show All"
                </button>
            </div>

            <div id="empty-contacts-msg" class="empty-msg" class:hide=move || !show_empty()>
                <h3>"There are no contacts."</h3>
                <button class="add-contact-btn" on:click=move |_| app.send(Command::AddContact)>
                    "Add Contact"
                </button>
            </div>

            <div id="empty-filter-msg" class="empty-msg" class:hide=move || empty_filter().is_none()>
                <h3>
                    "There are no contacts matching "
                    <span>{move || empty_filter().unwrap_or_default()}</span>
                    "."
                </h3>
            </div>

            <div id="contacts" class:hide=show_empty>
                <For
                    each=cards
                    key=|contact| contact.clone()
                    children=move |contact| view! { <ContactCard contact=contact /> }
                />
            </div>
        </section>
    }
}
