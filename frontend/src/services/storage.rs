use gloo::storage::{LocalStorage, Storage};
use shared::{KeyValueStorage, StoreError, StoreResult};

/// `window.localStorage` as a [`KeyValueStorage`].
///
/// Values are stored as raw strings, not through gloo's JSON helpers: the
/// theme is persisted as the literal `dark`/`light`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserStorage;

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| StoreError::unavailable(key, format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StoreError::unavailable(key, format!("{:?}", e)))
    }
}
