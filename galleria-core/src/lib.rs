pub mod config;
pub mod detail;
pub mod error;
pub mod gallery;
pub mod size;
pub mod storage;

// Re-export primary types for convenience.
pub use config::UiConfig;
pub use detail::{
    key_intent, KeyIntent, DELETE_FORM_SELECTOR, NEXT_LINK_SELECTOR, PREV_LINK_SELECTOR,
};
pub use error::CoreError;
pub use gallery::{
    form_urlencode, skip_confirm_for, DeleteFlow, DeleteOutcome, DeletePhase, DeleteRequest,
    DeleteStep, SizeSelection,
};
pub use size::ThumbSize;
pub use storage::{MemoryStore, PreferenceStore, KEY_SCROLL_POSITION, KEY_THUMBNAIL_SIZE};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
