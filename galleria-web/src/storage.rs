use galleria_core::PreferenceStore;

/// Preference store over the browser's `localStorage`.
///
/// All failures (storage disabled, quota exceeded, missing window)
/// degrade to the absent/ignored behavior the core contract requires;
/// nothing here can panic the page.
pub struct LocalStore;

impl LocalStore {
    fn backing() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::backing()?.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = Self::backing() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = Self::backing() {
            let _ = storage.remove_item(key);
        }
    }
}
