//! Contact Form Component
//!
//! Create/edit form. The heading and submit behaviour follow the form mode.

use leptos::prelude::*;

use crate::context::use_app;
use crate::events::Command;
use crate::ui::{ContactField, Panel};

/// Text input bound to one contact field
#[component]
fn FieldInput(field: ContactField, label: &'static str, input_type: &'static str) -> impl IntoView {
    let app = use_app();
    let name = field.name();

    view! {
        <label for=name>{label}</label>
        <input
            id=name
            name=name
            type=input_type
            prop:value=move || app.with_ui(|ui| ui.contact_form().field(field).to_string())
            on:input=move |ev| app.send(Command::EditField {
                field,
                value: event_target_value(&ev),
            })
        />
    }
}

/// One checkbox per registered tag
#[component]
fn TagChecklist() -> impl IntoView {
    let app = use_app();
    let tags = move || app.with_ui(|ui| ui.tag_options().to_vec());

    view! {
        <div id="tags-field" class="tags-field">
            <For
                each=tags
                key=|tag| tag.clone()
                children=move |tag| {
                    let checked_tag = tag.clone();
                    let toggled_tag = tag.clone();
                    view! {
                        <label class="tag-option">
                            <input
                                type="checkbox"
                                name="tags"
                                value=tag.clone()
                                prop:checked=move || app.with_ui(|ui| ui.contact_form().is_checked(&checked_tag))
                                on:change=move |ev| app.send(Command::ToggleTag {
                                    tag: toggled_tag.clone(),
                                    checked: event_target_checked(&ev),
                                })
                            />
                            {tag}
                        </label>
                    }
                }
            />
            <button type="button" class="add-tag-btn" on:click=move |_| app.send(Command::AddTag)>
                "New Tag"
            </button>
        </div>
    }
}

#[component]
pub fn ContactFormPanel() -> impl IntoView {
    let app = use_app();
    let visible = move || app.with_ui(|ui| ui.panel() == Panel::ContactForm);
    let heading = move || app.with_ui(|ui| ui.contact_form().heading());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        app.send(Command::SubmitContact);
    };

    view! {
        <section class="form-panel" class:hide=move || !visible()>
            <h2>{heading}</h2>
            <form id="contact-form" on:submit=on_submit>
                <FieldInput field=ContactField::FullName label="Full name:" input_type="text" />
                <FieldInput field=ContactField::Email label="Email address:" input_type="email" />
                <FieldInput field=ContactField::PhoneNumber label="Telephone number:" input_type="tel" />
                <fieldset>
                    <legend>"Tags"</legend>
                    <TagChecklist />
                </fieldset>
                <div class="form-actions">
                    <button type="submit">"Submit"</button>
                    <button
                        type="button"
                        id="contact-cancel"
                        on:click=move |_| app.send(Command::CancelContactForm)
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </section>
    }
}
