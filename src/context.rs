//! Application Context
//!
//! Owns the store, the UI state and the API client for the lifetime of the tab.
//! [`AppHandle`] is the copyable Leptos-side reference to it.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{Api, ApiResult, ContactsBackend, HttpBackend};
use crate::contacts::ContactsManager;
use crate::events::Command;
use crate::ui::{BrowserDialogs, Dialogs, UiManager};

pub struct AppContext<B, D> {
    pub contacts: Rc<RefCell<ContactsManager>>,
    pub ui: RefCell<UiManager>,
    pub api: Api<B>,
    pub dialogs: D,
    pub delete_prompt: String,
}

impl<B: ContactsBackend, D: Dialogs> AppContext<B, D> {
    pub fn new(backend: B, dialogs: D, delete_prompt: impl Into<String>) -> Self {
        let contacts = Rc::new(RefCell::new(ContactsManager::new()));
        Self {
            api: Api::new(backend, contacts.clone()),
            contacts,
            ui: RefCell::new(UiManager::new()),
            dialogs,
            delete_prompt: delete_prompt.into(),
        }
    }

    /// Initial load: fetch every contact, then render the list and tag checklist.
    pub async fn start(&self) -> ApiResult<()> {
        let count = self.api.list().await?;
        tracing::info!(count, "contacts ready");

        let contacts = self.contacts.borrow();
        let mut ui = self.ui.borrow_mut();
        ui.render_contacts(contacts.all(), false);
        ui.render_tags(contacts.tags());
        Ok(())
    }
}

pub type WebContext = AppContext<HttpBackend, BrowserDialogs>;

/// App-wide handle provided via Leptos context
#[derive(Clone, Copy)]
pub struct AppHandle {
    ctx: StoredValue<Rc<WebContext>, LocalStorage>,
    /// Bumped after every handled command so views re-read the UI state
    version: RwSignal<u32>,
}

impl AppHandle {
    pub fn new(ctx: WebContext) -> Self {
        Self {
            ctx: StoredValue::new_local(Rc::new(ctx)),
            version: RwSignal::new(0),
        }
    }

    /// Read UI state, subscribing the calling view to changes
    pub fn with_ui<T>(&self, f: impl FnOnce(&UiManager) -> T) -> T {
        self.version.track();
        self.ctx.with_value(|ctx| f(&ctx.ui.borrow()))
    }

    fn refresh(&self) {
        self.version.update(|v| *v = v.wrapping_add(1));
    }

    pub fn start(&self) {
        let ctx = self.ctx.get_value();
        let handle = *self;
        spawn_local(async move {
            if let Err(e) = ctx.start().await {
                tracing::error!(error = %e, "failed to load contacts");
            }
            handle.refresh();
        });
    }

    /// Run a command; failures are logged and leave the UI where it was.
    pub fn send(&self, command: Command) {
        let ctx = self.ctx.get_value();
        let handle = *self;
        spawn_local(async move {
            let name = command.name();
            if let Err(e) = ctx.dispatch(command).await {
                tracing::error!(command = name, error = %e, "command failed");
            }
            handle.refresh();
        });
    }
}

pub fn use_app() -> AppHandle {
    expect_context::<AppHandle>()
}
