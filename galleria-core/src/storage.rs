use std::collections::HashMap;

use tracing::{debug, warn};

use crate::size::ThumbSize;

/// Durable storage key for the thumbnail size preference.
pub const KEY_THUMBNAIL_SIZE: &str = "thumbnailSize";

/// Durable storage key for the one-shot scroll position handoff.
pub const KEY_SCROLL_POSITION: &str = "scrollPosition";

/// Key-value store backing the persisted gallery UI state.
///
/// Browser embedders back this with `localStorage`; tests use
/// [`MemoryStore`]. The surface is infallible on purpose: when the
/// backing store is unavailable, `get` returns `None` and writes are
/// ignored, so callers degrade to defaults instead of failing.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory store for tests and embedders without durable storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Read the persisted thumbnail size, defaulting to [`ThumbSize::Small`]
/// when nothing is stored or the stored token is unreadable.
pub fn load_thumb_size(store: &impl PreferenceStore) -> ThumbSize {
    let Some(token) = store.get(KEY_THUMBNAIL_SIZE) else {
        return ThumbSize::default();
    };
    match ThumbSize::parse(&token) {
        Ok(size) => size,
        Err(e) => {
            warn!("ignoring stored thumbnail size: {e}");
            ThumbSize::default()
        }
    }
}

/// Persist the thumbnail size, overwriting any previous value.
pub fn save_thumb_size(store: &mut impl PreferenceStore, size: ThumbSize) {
    store.set(KEY_THUMBNAIL_SIZE, size.token());
    debug!(size = size.token(), "saved thumbnail size");
}

/// Persist the vertical scroll offset ahead of a navigation.
pub fn save_scroll_position(store: &mut impl PreferenceStore, offset: u32) {
    store.set(KEY_SCROLL_POSITION, &offset.to_string());
    debug!(offset, "saved scroll position");
}

/// Take the stored scroll offset, clearing it so a later unrelated
/// visit cannot reuse it. Malformed values are consumed and dropped.
pub fn take_scroll_position(store: &mut impl PreferenceStore) -> Option<u32> {
    let raw = store.get(KEY_SCROLL_POSITION)?;
    store.remove(KEY_SCROLL_POSITION);
    match raw.parse::<u32>() {
        Ok(offset) => Some(offset),
        Err(_) => {
            warn!(raw = %raw, "discarding malformed scroll position");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumb_size_defaults_to_small_when_absent() {
        let store = MemoryStore::new();
        assert_eq!(load_thumb_size(&store), ThumbSize::Small);
    }

    #[test]
    fn thumb_size_survives_a_save() {
        let mut store = MemoryStore::new();
        save_thumb_size(&mut store, ThumbSize::Large);
        assert_eq!(load_thumb_size(&store), ThumbSize::Large);
        // A second save overwrites; there is never more than one value.
        save_thumb_size(&mut store, ThumbSize::Medium);
        assert_eq!(store.get(KEY_THUMBNAIL_SIZE).as_deref(), Some("medium"));
    }

    #[test]
    fn garbage_thumb_size_falls_back_to_small() {
        let mut store = MemoryStore::new();
        store.set(KEY_THUMBNAIL_SIZE, "gigantic");
        assert_eq!(load_thumb_size(&store), ThumbSize::Small);
    }

    #[test]
    fn scroll_position_is_one_shot() {
        let mut store = MemoryStore::new();
        save_scroll_position(&mut store, 420);
        assert_eq!(take_scroll_position(&mut store), Some(420));
        // Consumed: a second take without an intervening save finds nothing.
        assert_eq!(take_scroll_position(&mut store), None);
        assert_eq!(store.get(KEY_SCROLL_POSITION), None);
    }

    #[test]
    fn malformed_scroll_position_is_consumed_and_dropped() {
        let mut store = MemoryStore::new();
        store.set(KEY_SCROLL_POSITION, "-12px");
        assert_eq!(take_scroll_position(&mut store), None);
        assert_eq!(store.get(KEY_SCROLL_POSITION), None);
    }
}
