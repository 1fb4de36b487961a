//! Contacts App
//!
//! Root component: builds the context once, provides it, then loads contacts.

use leptos::prelude::*;

use crate::api::HttpBackend;
use crate::components::{ContactFormPanel, ContactsPanel, TagFormPanel};
use crate::config::{page_origin, AppConfig};
use crate::context::{AppContext, AppHandle};
use crate::ui::BrowserDialogs;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let url = config.endpoint_url(&page_origin());
    tracing::info!(endpoint = %url, "starting contact manager");

    let app = AppHandle::new(AppContext::new(
        HttpBackend::new(url),
        BrowserDialogs,
        config.delete_prompt,
    ));
    provide_context(app);

    // Initial load on mount
    Effect::new(move |_| app.start());

    view! {
        <div class="app-layout">
            <header>
                <h1>"Contact Manager"</h1>
            </header>
            <main>
                <ContactsPanel />
                <ContactFormPanel />
                <TagFormPanel />
            </main>
        </div>
    }
}
