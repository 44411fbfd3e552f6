use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::{debug, warn};

use crate::config::UiConfig;
use crate::size::ThumbSize;
use crate::storage::{self, PreferenceStore};

// ---------------------------------------------------------------------------
// Size selection
// ---------------------------------------------------------------------------

/// Page-level outcome of restoring or changing the thumbnail size.
///
/// Exactly one `size-*` class is active on the page root and exactly
/// one selector button carries the active marker; the embedder applies
/// both from this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeSelection {
    pub size: ThumbSize,
    /// Class to set on the page root, replacing any previous `size-*` class.
    pub page_class: String,
    /// `data-size` token of the button to mark active; all others are cleared.
    pub active_token: &'static str,
}

impl SizeSelection {
    fn of(size: ThumbSize) -> Self {
        Self {
            size,
            page_class: size.css_class(),
            active_token: size.token(),
        }
    }
}

/// Restore the persisted size preference at page load.
///
/// Absent or unreadable storage falls back to the default size; this
/// path never fails.
pub fn restore_size(store: &impl PreferenceStore) -> SizeSelection {
    SizeSelection::of(storage::load_thumb_size(store))
}

/// Persist and apply a size-button click.
///
/// An unknown token leaves the stored preference untouched and
/// re-applies the current selection instead of failing.
pub fn select_size(store: &mut impl PreferenceStore, token: &str) -> SizeSelection {
    match ThumbSize::parse(token) {
        Ok(size) => {
            storage::save_thumb_size(store, size);
            SizeSelection::of(size)
        }
        Err(e) => {
            warn!("size button click ignored: {e}");
            SizeSelection::of(storage::load_thumb_size(store))
        }
    }
}

// ---------------------------------------------------------------------------
// Scroll position handoff
// ---------------------------------------------------------------------------

/// Save the current scroll offset ahead of a card-link navigation, so
/// the next gallery load can land where the user left off.
pub fn save_scroll(store: &mut impl PreferenceStore, offset: u32) {
    storage::save_scroll_position(store, offset);
}

/// One-shot scroll restore: the offset to jump to, cleared on read.
/// A later load without an intervening save gets `None`.
pub fn restore_scroll(store: &mut impl PreferenceStore) -> Option<u32> {
    storage::take_scroll_position(store)
}

// ---------------------------------------------------------------------------
// Delete flow
// ---------------------------------------------------------------------------

/// Phase of the delete interaction for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePhase {
    #[default]
    Idle,
    ConfirmPending,
    RequestInFlight,
}

/// What the embedder should do next after a click on a delete control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteStep {
    /// Ask the user to confirm deleting the named image.
    AskConfirm { name: String },
    /// Send the deletion request immediately (confirmation skipped).
    SendRequest(DeleteRequest),
    /// A request is already in flight; drop this click.
    Ignore,
}

/// Description of the asynchronous deletion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub endpoint: String,
    /// `application/x-www-form-urlencoded` body; the `name` value is
    /// percent-encoded.
    pub body: String,
}

/// Terminal outcome of a deletion attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Fade the ancestor card out and remove it after `delay_ms`.
    FadeRemoveCard { delay_ms: u64 },
    /// No card ancestor (detail page): leave for the gallery root.
    Redirect { to: String },
    /// Non-success status or transport failure; the flow is idle again
    /// and the embedder should surface feedback.
    Failed { status: Option<u16> },
}

/// Delete interaction state machine:
/// `Idle → ConfirmPending → RequestInFlight → Idle`.
///
/// Clicks that arrive while a request is in flight are ignored rather
/// than re-sent, so one image cannot be deleted twice concurrently.
#[derive(Debug)]
pub struct DeleteFlow {
    phase: DeletePhase,
    /// Image name awaiting confirmation.
    pending: Option<String>,
    endpoint: String,
    gallery_root: String,
    fade_delay_ms: u64,
}

impl DeleteFlow {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            phase: DeletePhase::Idle,
            pending: None,
            endpoint: config.delete_endpoint.clone(),
            gallery_root: config.gallery_root.clone(),
            fade_delay_ms: config.fade_delay_ms,
        }
    }

    pub fn phase(&self) -> DeletePhase {
        self.phase
    }

    /// Click on a delete control for `name`.
    pub fn begin(&mut self, name: &str, skip_confirm: bool) -> DeleteStep {
        if self.phase == DeletePhase::RequestInFlight {
            debug!(name, "delete request already in flight, click dropped");
            return DeleteStep::Ignore;
        }
        if skip_confirm {
            self.pending = None;
            self.phase = DeletePhase::RequestInFlight;
            return DeleteStep::SendRequest(self.request_for(name));
        }
        self.pending = Some(name.to_string());
        self.phase = DeletePhase::ConfirmPending;
        DeleteStep::AskConfirm {
            name: name.to_string(),
        }
    }

    /// Answer to the confirmation prompt.
    ///
    /// Declining aborts with no side effects. Accepting yields the
    /// request to send and moves the flow in flight.
    pub fn confirmed(&mut self, accept: bool) -> Option<DeleteRequest> {
        if self.phase != DeletePhase::ConfirmPending {
            return None;
        }
        let name = self.pending.take()?;
        if !accept {
            self.phase = DeletePhase::Idle;
            debug!(name = %name, "deletion cancelled");
            return None;
        }
        self.phase = DeletePhase::RequestInFlight;
        Some(self.request_for(&name))
    }

    /// Completion of the network call.
    ///
    /// `status` is `None` on transport failure. `in_card` reports
    /// whether the originating element sits inside a card container,
    /// which decides between optimistic removal and a redirect.
    pub fn completed(&mut self, status: Option<u16>, in_card: bool) -> DeleteOutcome {
        self.phase = DeletePhase::Idle;
        match status {
            Some(200) | Some(303) => {
                if in_card {
                    DeleteOutcome::FadeRemoveCard {
                        delay_ms: self.fade_delay_ms,
                    }
                } else {
                    DeleteOutcome::Redirect {
                        to: self.gallery_root.clone(),
                    }
                }
            }
            other => {
                warn!(status = ?other, "deletion request failed");
                DeleteOutcome::Failed { status: other }
            }
        }
    }

    fn request_for(&self, name: &str) -> DeleteRequest {
        DeleteRequest {
            endpoint: self.endpoint.clone(),
            body: format!("name={}", form_urlencode(name)),
        }
    }
}

/// Characters escaped in a form value: everything `encodeURIComponent`
/// escapes, i.e. all non-alphanumerics except `- _ . ! ~ * ' ( )`.
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a form value the way `encodeURIComponent` does, so
/// the server's query-string parser sees the exact image identifier.
pub fn form_urlencode(value: &str) -> String {
    utf8_percent_encode(value, FORM_VALUE).to_string()
}

/// Resolve a delete control's `data-skip-confirm` attribute against
/// the page-wide default. A bare or `"true"` attribute skips the
/// prompt, `"false"` forces it, anything else inherits the default,
/// so one page can mix confirming and non-confirming controls.
pub fn skip_confirm_for(attribute: Option<&str>, page_default: bool) -> bool {
    match attribute {
        Some("") | Some("true") => true,
        Some("false") => false,
        _ => page_default,
    }
}
