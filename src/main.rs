//! Contact Manager Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod contacts;
mod context;
mod events;
mod form;
mod logging;
mod models;
mod ui;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    let level = config.level().unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("[CONFIG] {}, logging at info", e).into());
        tracing::Level::INFO
    });
    logging::init(level);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
