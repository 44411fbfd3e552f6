use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlElement, Request, RequestInit, Response};

use galleria_core::{
    gallery, skip_confirm_for, DeleteFlow, DeleteOutcome, DeleteRequest, DeleteStep, UiConfig,
};

use crate::dom;
use crate::storage::LocalStore;

/// Wire the gallery page: size selector, scroll handoff, card links.
pub fn wire(document: &Document) {
    wire_size_selector(document);
    restore_scroll();
    wire_card_links(document);
}

// ---------------------------------------------------------------------------
// Size selection
// ---------------------------------------------------------------------------

fn wire_size_selector(document: &Document) {
    let buttons = dom::query_all(document, ".size-btn");
    let selection = gallery::restore_size(&LocalStore);
    dom::set_page_size_class(document, &selection.page_class);
    dom::mark_active_button(&buttons, selection.active_token);

    for btn in &buttons {
        let all = buttons.clone();
        let target = btn.clone();
        let document = document.clone();
        EventListener::new(btn, "click", move |_event| {
            let Some(token) = target.get_attribute("data-size") else {
                return;
            };
            let selection = gallery::select_size(&mut LocalStore, &token);
            dom::set_page_size_class(&document, &selection.page_class);
            dom::mark_active_button(&all, selection.active_token);
        })
        .forget();
    }
}

// ---------------------------------------------------------------------------
// Scroll position handoff
// ---------------------------------------------------------------------------

fn restore_scroll() {
    if let Some(offset) = gallery::restore_scroll(&mut LocalStore) {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, offset as f64);
        }
    }
}

fn wire_card_links(document: &Document) {
    for link in dom::query_all(document, ".card-link") {
        EventListener::new(&link, "click", move |_event| {
            let offset = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            gallery::save_scroll(&mut LocalStore, offset.max(0.0) as u32);
        })
        .forget();
    }
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

/// Wire every delete control on the page to the shared delete flow.
///
/// The flow carries the in-flight lock, so a second click anywhere on
/// the page while a request is pending is dropped.
pub fn wire_delete(document: &Document, config: &UiConfig) {
    let buttons = dom::query_all(document, ".delete-btn");
    if buttons.is_empty() {
        return;
    }
    let flow = Rc::new(RefCell::new(DeleteFlow::new(config)));
    let page_skip_confirm = config.skip_confirm;

    for btn in buttons {
        let flow = Rc::clone(&flow);
        let target = btn.clone();
        EventListener::new(&btn, "click", move |event| {
            // The control sits inside a navigating card; keep the click local.
            event.prevent_default();
            event.stop_propagation();

            let Some(name) = target.get_attribute("data-name") else {
                warn!("delete control without a data-name attribute");
                return;
            };

            // A control may opt out of (or into) confirmation on its own.
            let skip = skip_confirm_for(
                target.get_attribute("data-skip-confirm").as_deref(),
                page_skip_confirm,
            );
            let step = flow.borrow_mut().begin(&name, skip);
            let request = match step {
                DeleteStep::Ignore => return,
                DeleteStep::SendRequest(request) => Some(request),
                DeleteStep::AskConfirm { name } => {
                    let accepted = ask_confirm(&name);
                    flow.borrow_mut().confirmed(accepted)
                }
            };
            let Some(request) = request else {
                return;
            };

            let card = target.closest(".card").ok().flatten();
            let flow = Rc::clone(&flow);
            wasm_bindgen_futures::spawn_local(async move {
                let status = send_delete(&request).await;
                let outcome = flow.borrow_mut().completed(status, card.is_some());
                debug!(?outcome, "delete request completed");
                apply_outcome(outcome, card);
            });
        })
        .forget();
    }
}

fn ask_confirm(name: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(&format!("Delete \"{name}\"?")).ok())
        .unwrap_or(false)
}

/// POST the deletion and report the response status, `None` on any
/// transport failure.
async fn send_delete(request: &DeleteRequest) -> Option<u16> {
    let window = web_sys::window()?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&request.body));
    let req = Request::new_with_str_and_init(&request.endpoint, &init).ok()?;
    req.headers()
        .set("Content-Type", "application/x-www-form-urlencoded")
        .ok()?;

    let response = JsFuture::from(window.fetch_with_request(&req)).await.ok()?;
    let response: Response = response.dyn_into().ok()?;
    Some(response.status())
}

fn apply_outcome(outcome: DeleteOutcome, card: Option<Element>) {
    match outcome {
        DeleteOutcome::FadeRemoveCard { delay_ms } => {
            let Some(card) = card else {
                return;
            };
            if let Some(el) = card.dyn_ref::<HtmlElement>() {
                let _ = el.style().set_property("opacity", "0");
            }
            // Removal waits for the opacity transition to play out.
            Timeout::new(delay_ms as u32, move || card.remove()).forget();
        }
        DeleteOutcome::Redirect { to } => {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&to);
            }
        }
        DeleteOutcome::Failed { status } => {
            warn!(?status, "image deletion failed");
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message("Delete failed; the image was not removed.");
            }
        }
    }
}
