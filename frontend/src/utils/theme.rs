use log::warn;

use crate::utils::storage::KeyValueStore;

/// Light/dark choice backed by a persisted `"true"`/`"false"` flag.
pub struct DisplayPreference<S: KeyValueStore> {
    store: S,
    key: &'static str,
    dark: bool,
}

impl<S: KeyValueStore> DisplayPreference<S> {
    /// Reads the persisted flag once; the in-memory value is authoritative
    /// afterwards.
    pub fn open(store: S, key: &'static str) -> Self {
        let mut pref = Self {
            store,
            key,
            dark: false,
        };
        pref.dark = pref.load();
        pref
    }

    /// Anything other than a stored `"true"` counts as light mode.
    pub fn load(&self) -> bool {
        match self.store.get(self.key) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                warn!("Could not read display preference: {}", e);
                false
            }
        }
    }

    pub fn save(&self, dark: bool) {
        if let Err(e) = self.store.set(self.key, if dark { "true" } else { "false" }) {
            warn!("Could not persist display preference: {}", e);
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn theme_name(&self) -> &'static str {
        if self.dark {
            "dark"
        } else {
            "light"
        }
    }

    /// Flips the preference and persists the new value. A failed write keeps
    /// the flipped value for this page load.
    pub fn toggle(&mut self) -> bool {
        self.dark = !self.dark;
        self.save(self.dark);
        self.dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DARK_MODE_KEY;
    use crate::utils::storage::memory::MemoryStorage;

    #[test]
    fn missing_flag_defaults_to_light() {
        let pref = DisplayPreference::open(MemoryStorage::default(), DARK_MODE_KEY);
        assert!(!pref.is_dark());
        assert_eq!(pref.theme_name(), "light");
    }

    #[test]
    fn stored_true_loads_dark() {
        let pref = DisplayPreference::open(MemoryStorage::with(DARK_MODE_KEY, "true"), DARK_MODE_KEY);
        assert!(pref.is_dark());
    }

    #[test]
    fn malformed_flag_loads_light() {
        for junk in ["TRUE", "1", "yes", ""] {
            let pref = DisplayPreference::open(MemoryStorage::with(DARK_MODE_KEY, junk), DARK_MODE_KEY);
            assert!(!pref.is_dark(), "{:?} should not count as dark", junk);
        }
    }

    #[test]
    fn unreadable_storage_loads_light() {
        let pref = DisplayPreference::open(MemoryStorage::unreadable(), DARK_MODE_KEY);
        assert!(!pref.is_dark());
        assert_eq!(pref.theme_name(), "light");
    }

    #[test]
    fn toggle_still_works_when_storage_is_unreadable() {
        let mut pref = DisplayPreference::open(MemoryStorage::unreadable(), DARK_MODE_KEY);
        assert!(pref.toggle());
        assert_eq!(pref.theme_name(), "dark");
    }

    #[test]
    fn double_toggle_restores_and_persists() {
        let mut pref = DisplayPreference::open(MemoryStorage::default(), DARK_MODE_KEY);
        assert!(pref.toggle());
        assert_eq!(pref.store.get(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));
        assert!(!pref.toggle());
        assert!(!pref.is_dark());
        assert_eq!(pref.store.get(DARK_MODE_KEY).unwrap().as_deref(), Some("false"));
        assert!(!pref.load());
    }

    #[test]
    fn failed_write_still_flips_in_memory() {
        let mut pref = DisplayPreference::open(MemoryStorage::read_only(), DARK_MODE_KEY);
        assert!(pref.toggle());
        assert!(pref.is_dark());
        assert!(!pref.load());
    }
}
