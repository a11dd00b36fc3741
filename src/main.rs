//! Counters Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod favorites;
mod forms;
mod loader;
mod models;
mod mutations;
mod refresh;
mod storage;

use app::App;
use config::Config;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = Config::load();
    if let Err(err) = console_logger::init(config.log_level) {
        web_sys::console::error_1(&format!("Logger already installed: {}", err).into());
    }
    mount_to_body(move || view! { <App config=config /> });
}
