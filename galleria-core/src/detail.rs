/// Selector for the previous-image navigation link.
pub const PREV_LINK_SELECTOR: &str = ".nav.prev";

/// Selector for the next-image navigation link.
pub const NEXT_LINK_SELECTOR: &str = ".nav.next";

/// Selector for the delete form. Class-scoped so an unrelated form on
/// the same page can never be submitted by the delete shortcut.
pub const DELETE_FORM_SELECTOR: &str = "form.delete-form";

/// Intent derived from a detail-page keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    /// Follow the previous-image link, if the page has one.
    NavigatePrev,
    /// Follow the next-image link, if the page has one.
    NavigateNext,
    /// Submit the page's delete form, if present.
    SubmitDeleteForm,
}

/// Map a keyboard event `key` value to a detail-page intent.
///
/// Returns `None` for keys the page does not handle, leaving default
/// browser behavior intact. Every `Some` intent requires the event's
/// default action to be suppressed, even when the target link or form
/// turns out to be absent. No state is retained between keypresses.
pub fn key_intent(key: &str) -> Option<KeyIntent> {
    match key {
        "ArrowLeft" => Some(KeyIntent::NavigatePrev),
        "ArrowRight" => Some(KeyIntent::NavigateNext),
        "d" | "D" | "Delete" => Some(KeyIntent::SubmitDeleteForm),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_to_navigation() {
        assert_eq!(key_intent("ArrowLeft"), Some(KeyIntent::NavigatePrev));
        assert_eq!(key_intent("ArrowRight"), Some(KeyIntent::NavigateNext));
    }

    #[test]
    fn delete_keys_map_to_form_submission() {
        assert_eq!(key_intent("d"), Some(KeyIntent::SubmitDeleteForm));
        assert_eq!(key_intent("D"), Some(KeyIntent::SubmitDeleteForm));
        assert_eq!(key_intent("Delete"), Some(KeyIntent::SubmitDeleteForm));
    }

    #[test]
    fn delete_form_selector_is_class_scoped() {
        // A bare `form` selector would submit any form the page grows
        // later (an upload form, say) on the delete shortcut.
        assert_eq!(DELETE_FORM_SELECTOR, "form.delete-form");
        assert_ne!(DELETE_FORM_SELECTOR, "form");
    }

    #[test]
    fn other_keys_are_left_to_the_browser() {
        assert_eq!(key_intent("ArrowUp"), None);
        assert_eq!(key_intent("Enter"), None);
        assert_eq!(key_intent("Backspace"), None);
        assert_eq!(key_intent(""), None);
    }
}
