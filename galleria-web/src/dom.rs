use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

/// Collect a selector match list into owned elements.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Set the page-level size state class on `<body>`, replacing any
/// previous one. The body carries only this state class.
pub fn set_page_size_class(document: &Document, class: &str) {
    if let Some(body) = document.body() {
        body.set_class_name(class);
    }
}

/// Move the `active` marker to the button whose `data-size` matches
/// `token`; every other button has it cleared.
pub fn mark_active_button(buttons: &[Element], token: &str) {
    for btn in buttons {
        let is_active = btn.get_attribute("data-size").as_deref() == Some(token);
        let _ = if is_active {
            btn.class_list().add_1("active")
        } else {
            btn.class_list().remove_1("active")
        };
    }
}
