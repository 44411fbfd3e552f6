//! Browser bindings for the Galleria gallery pages.
//!
//! Compiles to wasm and wires the pure controllers from
//! `galleria-core` to the real page: `localStorage`-backed
//! preferences, click and keyboard listeners, and the asynchronous
//! delete call. One module serves both the gallery and the detail
//! page; each wiring step is a no-op when its elements are absent.

mod detail;
mod dom;
mod gallery;
mod storage;

use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::Document;

use galleria_core::{UiConfig, DELETE_FORM_SELECTOR, NEXT_LINK_SELECTOR, PREV_LINK_SELECTOR};

/// Id of the optional page-embedded JSON config block.
const CONFIG_ELEMENT_ID: &str = "galleria-config";

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let config = page_config(&document);

    if has_any(&document, ".size-btn, .card-link") {
        gallery::wire(&document);
        info!("gallery controller wired");
    }
    // Delete controls appear on both page kinds.
    gallery::wire_delete(&document, &config);

    let detail_selector =
        format!("{PREV_LINK_SELECTOR}, {NEXT_LINK_SELECTOR}, {DELETE_FORM_SELECTOR}");
    if has_any(&document, &detail_selector) {
        detail::wire(&document);
        info!("detail controller wired");
    }
}

fn has_any(document: &Document, selector: &str) -> bool {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .is_some()
}

/// Read the page config block, falling back to defaults when the
/// block is absent or unreadable.
fn page_config(document: &Document) -> UiConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return UiConfig::default();
    };
    match UiConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            warn!("ignoring malformed page config: {e}");
            UiConfig::default()
        }
    }
}
