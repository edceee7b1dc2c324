//! Theme preference persisted in a simple key-value store.
//!
//! The browser backs this with `localStorage`; tests and non-browser targets
//! use [`MemoryStore`].

use std::cell::RefCell;
use std::collections::HashMap;

use crate::enums::Theme;

/// Key under which the theme preference is stored
pub const THEME_STORAGE_KEY: &str = "shop-mins-theme";

/// Minimal string key-value store
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// In-process store
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()> {
        (**self).set_item(key, value)
    }
}

/// Current theme plus the store it is persisted to.
#[derive(Debug)]
pub struct ThemePreference<S> {
    store: S,
    key: String,
    theme: Theme,
}

impl<S: KeyValueStore> ThemePreference<S> {
    /// Read the preference under [`THEME_STORAGE_KEY`], defaulting to light.
    pub fn load(store: S) -> Self {
        Self::load_with_key(store, THEME_STORAGE_KEY, Theme::default())
    }

    /// Absent or unrecognized stored values fall back to `default`.
    pub fn load_with_key(store: S, key: impl Into<String>, default: Theme) -> Self {
        let key = key.into();
        let theme = match store.get_item(&key) {
            Some(raw) => raw.parse::<Theme>().unwrap_or_else(|e| {
                log::warn!("ignoring stored theme preference: {e}");
                default
            }),
            None => default,
        };
        Self { store, key, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Switch to `theme` and persist it. A failed write keeps the new theme
    /// for the session.
    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(e) = self.store.set_item(&self.key, theme.as_str()) {
            log::warn!("failed to persist theme '{}': {e:#}", theme);
        }
    }

    /// Flip light/dark, persist, and return the new theme.
    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.set(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get_item(&self, _key: &str) -> Option<String> {
            Some("dark".to_string())
        }

        fn set_item(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
            anyhow::bail!("quota exceeded")
        }
    }

    #[test]
    fn test_absent_value_defaults_to_light() {
        let pref = ThemePreference::load(MemoryStore::new());
        assert_eq!(pref.theme(), Theme::Light);
        assert_eq!(pref.store().get_item(THEME_STORAGE_KEY), None);
    }

    #[test]
    fn test_stored_value_is_restored() {
        let store = MemoryStore::with_item(THEME_STORAGE_KEY, "dark");
        assert_eq!(ThemePreference::load(&store).theme(), Theme::Dark);
    }

    #[test]
    fn test_garbage_value_falls_back() {
        let store = MemoryStore::with_item(THEME_STORAGE_KEY, "sepia");
        assert_eq!(ThemePreference::load(&store).theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_persists_each_transition() {
        let store = MemoryStore::new();
        let mut pref = ThemePreference::load(&store);

        assert_eq!(pref.toggle(), Theme::Dark);
        assert_eq!(store.get_item(THEME_STORAGE_KEY).as_deref(), Some("dark"));

        assert_eq!(pref.toggle(), Theme::Light);
        assert_eq!(store.get_item(THEME_STORAGE_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_custom_key() {
        let store = MemoryStore::new();
        let mut pref = ThemePreference::load_with_key(&store, "other-key", Theme::Dark);
        assert_eq!(pref.theme(), Theme::Dark);
        pref.set(Theme::Light);
        assert_eq!(store.get_item("other-key").as_deref(), Some("light"));
        assert_eq!(store.get_item(THEME_STORAGE_KEY), None);
    }

    #[test]
    fn test_failed_write_still_switches() {
        let mut pref = ThemePreference::load(ReadOnlyStore);
        assert_eq!(pref.theme(), Theme::Dark);
        assert_eq!(pref.toggle(), Theme::Light);
        assert_eq!(pref.theme(), Theme::Light);
    }
}
