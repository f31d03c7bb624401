//! Startup Configuration
//!
//! Reads the optional `<script id="app-config" type="application/json">`
//! block from the host page and fills in the page origin.

use recipe_core::ClientConfig;

const CONFIG_ELEMENT_ID: &str = "app-config";

pub fn load_config() -> ClientConfig {
    let Some(window) = web_sys::window() else {
        return ClientConfig::default();
    };
    let origin = window.location().origin().unwrap_or_default();

    let embedded = window
        .document()
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    let config = match embedded {
        Some(json) => ClientConfig::from_json(&json).unwrap_or_else(|err| {
            log::warn!("ignoring #{}: {}", CONFIG_ELEMENT_ID, err);
            ClientConfig::default()
        }),
        None => ClientConfig::default(),
    };

    config.with_origin(&origin)
}
