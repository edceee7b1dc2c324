use anyhow::anyhow;
use contracts::KeyValueStore;

/// `window.localStorage`, looked up on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let storage = Self::storage().ok_or_else(|| anyhow!("localStorage is not available"))?;
        storage
            .set_item(key, value)
            .map_err(|e| anyhow!("localStorage write for '{key}' failed: {e:?}"))
    }
}
