//! Tag Form Component
//!
//! Adds a tag name to the registry so it shows up in the contact form checklist.

use leptos::prelude::*;

use crate::context::use_app;
use crate::events::Command;
use crate::ui::Panel;

#[component]
pub fn TagFormPanel() -> impl IntoView {
    let app = use_app();
    let visible = move || app.with_ui(|ui| ui.panel() == Panel::TagForm);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        app.send(Command::SubmitTag);
    };

    view! {
        <section class="form-panel" class:hide=move || !visible()>
            <h2>"Create Tag"</h2>
            <form id="tag-form" on:submit=on_submit>
                <label for="new_tag">"Tag name:"</label>
                <input
                    id="new_tag"
                    name="new_tag"
                    type="text"
                    prop:value=move || app.with_ui(|ui| ui.new_tag().to_string())
                    on:input=move |ev| app.send(Command::EditNewTag(event_target_value(&ev)))
                />
                <div class="form-actions">
                    <button type="submit">"Add"</button>
                    <button
                        type="button"
                        id="tag-cancel"
                        on:click=move |_| app.send(Command::CancelTagForm)
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </section>
    }
}
