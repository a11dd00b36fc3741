//! Key-Value Persistence
//!
//! Port over a string key-value backend, so client state can be
//! persisted in `localStorage` in the browser and in memory in tests.

use crate::error::StorageError;

pub trait KeyValueStore {
    /// Read a value; missing keys and unreadable backends both yield None
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite a value
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Browser `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|err| StorageError::Write {
            key: key.to_string(),
            message: format!("{:?}", err),
        })
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;

#[cfg(test)]
mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::KeyValueStore;
    use crate::error::StorageError;

    /// Shared in-memory backend; clones see the same entries
    #[derive(Debug, Clone, Default)]
    pub struct MemoryStorage {
        entries: Rc<RefCell<HashMap<String, String>>>,
        read_only: bool,
    }

    impl MemoryStorage {
        pub fn with_entry(key: &str, value: &str) -> Self {
            let storage = Self::default();
            storage.entries.borrow_mut().insert(key.to_string(), value.to_string());
            storage
        }

        /// Backend whose writes always fail (quota exceeded, private mode)
        pub fn read_only() -> Self {
            Self { read_only: true, ..Self::default() }
        }
    }

    impl KeyValueStore for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.read_only {
                return Err(StorageError::Write {
                    key: key.to_string(),
                    message: "QuotaExceededError".to_string(),
                });
            }
            self.entries.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}
