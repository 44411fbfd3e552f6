use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement, KeyboardEvent};

use galleria_core::{
    key_intent, KeyIntent, DELETE_FORM_SELECTOR, NEXT_LINK_SELECTOR, PREV_LINK_SELECTOR,
};

/// Wire document-level keyboard shortcuts for the detail page.
///
/// Each keypress is resolved against current page content; a missing
/// nav link or delete form is a silent no-op.
pub fn wire(document: &Document) {
    let doc = document.clone();
    EventListener::new(document, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let Some(intent) = key_intent(&event.key()) else {
            return;
        };
        event.prevent_default();
        match intent {
            KeyIntent::NavigatePrev => follow(&doc, PREV_LINK_SELECTOR),
            KeyIntent::NavigateNext => follow(&doc, NEXT_LINK_SELECTOR),
            KeyIntent::SubmitDeleteForm => submit_delete_form(&doc),
        }
    })
    .forget();
}

fn follow(document: &Document, selector: &str) {
    let Some(href) = document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.get_attribute("href"))
    else {
        return;
    };
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(&href);
    }
}

fn submit_delete_form(document: &Document) {
    let Some(form) = document
        .query_selector(DELETE_FORM_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };
    let _ = form.submit();
}
