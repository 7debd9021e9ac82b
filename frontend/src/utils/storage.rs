use web_sys::window;

use crate::error::StorageError;

/// String key-value persistence, the shape of `window.localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, looked up on every call so a blocked storage never
/// gets cached.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = window().ok_or(StorageError::NoWindow)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            _ => Err(StorageError::Unavailable),
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::KeyValueStore;
    use crate::error::StorageError;

    #[derive(Default)]
    pub struct MemoryStorage {
        items: RefCell<HashMap<String, String>>,
        fail_reads: bool,
        fail_writes: bool,
    }

    impl MemoryStorage {
        pub fn with(key: &str, value: &str) -> Self {
            let storage = Self::default();
            storage
                .items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            storage
        }

        pub fn unreadable() -> Self {
            Self {
                fail_reads: true,
                ..Self::default()
            }
        }

        pub fn read_only() -> Self {
            Self {
                fail_writes: true,
                ..Self::default()
            }
        }
    }

    impl KeyValueStore for MemoryStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            if self.fail_reads {
                return Err(StorageError::Read {
                    key: key.to_string(),
                    reason: "access denied".to_string(),
                });
            }
            Ok(self.items.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::Write {
                    key: key.to_string(),
                    reason: "quota exceeded".to_string(),
                });
            }
            self.items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}
