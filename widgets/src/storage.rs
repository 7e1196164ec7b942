//! Persistence seam for the active locale.

use crate::locale::Locale;
use std::cell::RefCell;

/// Key-value store holding the locale code between visits.
pub trait LocaleStore {
    fn load(&self) -> Option<String>;
    fn save(&self, code: &str);

    /// Current locale, `default` when nothing (valid) is stored.
    fn restore(&self, default: Locale) -> Locale {
        Locale::restore(self.load().as_deref(), default)
    }

    fn persist(&self, locale: Locale) {
        self.save(locale.code());
    }
}

/// Page-lifetime store, used when `localStorage` is unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocaleStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn save(&self, code: &str) {
        *self.value.borrow_mut() = Some(code.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.restore(Locale::En), Locale::En);
        store.persist(Locale::Ru);
        assert_eq!(store.load().as_deref(), Some("ru"));
        assert_eq!(store.restore(Locale::En), Locale::Ru);
    }

    #[test]
    fn test_invalid_stored_value_uses_default() {
        let store = MemoryStore::new();
        store.save("klingon");
        assert_eq!(store.restore(Locale::Ru), Locale::Ru);
    }
}
