//! # Record Store
//!
//! The persistence boundary for donor data. Callers depend on the
//! [`DonorRepository`] trait and get a concrete repository injected, so the
//! browser's localStorage can be swapped for [`MemoryStorage`] in tests.
//!
//! Every mutation reads the whole collection, changes it in memory and writes
//! the whole collection back. There is no locking and no schema version: two
//! tabs writing at once lose updates, last write wins.

use log::{debug, info};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{StoreError, StoreResult};
use crate::{seed_donors, Donor};

/// String-keyed storage with the semantics of `window.localStorage`
pub trait KeyValueStorage {
    /// Read the value stored under `key`, `None` when absent
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Rc<S> {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set_item(key, value)
    }
}

/// In-memory storage for tests and for browsers without localStorage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with a single entry
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Get-all / save-all access to the donor collection
pub trait DonorRepository {
    /// Return every persisted donor, seeding the defaults on first use
    fn load(&self) -> StoreResult<Vec<Donor>>;

    /// Replace the persisted collection wholesale
    fn save(&self, donors: &[Donor]) -> StoreResult<()>;
}

/// Donor repository over any [`KeyValueStorage`], storing JSON under one key
#[derive(Debug, Clone)]
pub struct StorageDonorRepository<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> StorageDonorRepository<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: KeyValueStorage> DonorRepository for StorageDonorRepository<S> {
    fn load(&self) -> StoreResult<Vec<Donor>> {
        // An empty string counts as "nothing stored", matching a falsy getItem
        match self.storage.get_item(&self.key)? {
            Some(raw) if !raw.is_empty() => {
                let donors: Vec<Donor> =
                    serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                        key: self.key.clone(),
                        source,
                    })?;
                debug!("Loaded {} donors from '{}'", donors.len(), self.key);
                Ok(donors)
            }
            _ => {
                let donors = seed_donors();
                self.save(&donors)?;
                info!("Seeded '{}' with {} default donors", self.key, donors.len());
                Ok(donors)
            }
        }
    }

    fn save(&self, donors: &[Donor]) -> StoreResult<()> {
        let raw = serde_json::to_string(donors)?;
        self.storage.set_item(&self.key, &raw)?;
        debug!("Saved {} donors to '{}'", donors.len(), self.key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BloodGroup;

    fn repository() -> StorageDonorRepository<Rc<MemoryStorage>> {
        StorageDonorRepository::new(Rc::new(MemoryStorage::new()), "donors")
    }

    #[test]
    fn test_load_seeds_empty_storage() {
        let repo = repository();
        assert!(repo.storage().is_empty());

        let donors = repo.load().unwrap();

        assert_eq!(donors, seed_donors());
        let persisted = repo.storage().get_item("donors").unwrap().unwrap();
        assert_eq!(persisted, serde_json::to_string(&seed_donors()).unwrap());
    }

    #[test]
    fn test_load_returns_persisted_collection_without_reseeding() {
        let repo = repository();
        let mut donors = seed_donors();
        donors.truncate(2);
        repo.save(&donors).unwrap();

        assert_eq!(repo.load().unwrap(), donors);
    }

    #[test]
    fn test_empty_string_is_treated_as_missing() {
        let storage = Rc::new(MemoryStorage::with_item("donors", ""));
        let repo = StorageDonorRepository::new(storage, "donors");

        assert_eq!(repo.load().unwrap().len(), 5);
    }

    #[test]
    fn test_empty_array_is_a_valid_collection() {
        let storage = Rc::new(MemoryStorage::with_item("donors", "[]"));
        let repo = StorageDonorRepository::new(storage, "donors");

        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_of_load_is_a_no_op() {
        let repo = repository();
        repo.load().unwrap();
        let before = repo.storage().get_item("donors").unwrap();

        let donors = repo.load().unwrap();
        repo.save(&donors).unwrap();

        assert_eq!(repo.storage().get_item("donors").unwrap(), before);
    }

    #[test]
    fn test_corrupt_store_is_reported() {
        let storage = Rc::new(MemoryStorage::with_item("donors", "{\"oops\": true}"));
        let repo = StorageDonorRepository::new(storage, "donors");

        let err = repo.load().unwrap_err();
        assert!(err.is_corrupt());
    }

    #[test]
    fn test_hand_edited_blood_group_is_kept() {
        let raw = r#"[{"id":7,"name":"Test","blood_group":"o+","city":"Tabuk","phone":"1","last_donation":"","status":"active"}]"#;
        let storage = Rc::new(MemoryStorage::with_item("donors", raw));
        let repo = StorageDonorRepository::new(storage, "donors");

        let donors = repo.load().unwrap();
        assert_eq!(donors[0].blood_group, BloodGroup::Unrecognized("o+".to_string()));

        repo.save(&donors).unwrap();
        assert_eq!(repo.storage().get_item("donors").unwrap().unwrap(), raw);
    }

    #[test]
    fn test_keys_are_independent() {
        let storage = Rc::new(MemoryStorage::new());
        let donors = StorageDonorRepository::new(Rc::clone(&storage), "donors");
        storage.set_item("theme", "dark").unwrap();

        donors.load().unwrap();

        assert_eq!(storage.len(), 2);
        assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("dark"));
    }
}
