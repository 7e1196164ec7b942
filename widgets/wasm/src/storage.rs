//! `localStorage`-backed locale persistence.

use awaken_widgets::storage::{LocaleStore, MemoryStore};
use web_sys::Storage;

pub struct BrowserStore {
    storage: Storage,
    key: String,
}

impl LocaleStore for BrowserStore {
    fn load(&self) -> Option<String> {
        self.storage.get_item(&self.key).ok().flatten()
    }

    fn save(&self, code: &str) {
        if let Err(e) = self.storage.set_item(&self.key, code) {
            tracing::debug!("[awaken][lang] could not persist locale: {:?}", e);
        }
    }
}

/// `localStorage` when the browser allows it (it throws in some private
/// modes), otherwise a page-lifetime store.
pub fn locale_store(window: &web_sys::Window, key: &str) -> Box<dyn LocaleStore> {
    match window.local_storage() {
        Ok(Some(storage)) => Box::new(BrowserStore {
            storage,
            key: key.to_string(),
        }),
        _ => {
            tracing::debug!("[awaken][lang] localStorage unavailable, locale will not persist");
            Box::new(MemoryStore::new())
        }
    }
}
