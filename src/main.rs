//! Recipe Book Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod logger;
mod pages;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();

    let config = config::load_config();
    log::set_max_level(config.log_level());
    log::info!("recipe book starting, api at {}", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
