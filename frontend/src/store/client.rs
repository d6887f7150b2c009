use crate::{
    config,
    store::{
        memory::MemoryStore,
        types::{Client, Employee, Principal, TimeRecord},
    },
    utils::storage::local_storage,
};
use serde::{de::DeserializeOwned, Serialize};
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read `{key}`")]
    Read { key: String },
    #[error("failed to write `{key}`")]
    Write { key: String },
    #[error("malformed data under `{key}`: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode data for `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Synchronous string key-value storage, the shape of `window.localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Employees,
    Clients,
    TimeRecords,
    Session,
}

impl Collection {
    fn suffix(self) -> &'static str {
        match self {
            Collection::Employees => "employees",
            Collection::Clients => "clients",
            Collection::TimeRecords => "records",
            Collection::Session => "session",
        }
    }

    pub fn storage_key(self, prefix: &str) -> String {
        format!("{prefix}_{}", self.suffix())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        local_storage()
            .map_err(StoreError::Unavailable)?
            .get_item(key)
            .map_err(|_| StoreError::Read { key: key.into() })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        local_storage()
            .map_err(StoreError::Unavailable)?
            .set_item(key, value)
            .map_err(|_| StoreError::Write { key: key.into() })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        local_storage()
            .map_err(StoreError::Unavailable)?
            .remove_item(key)
            .map_err(|_| StoreError::Write { key: key.into() })
    }
}

/// Typed access to the persisted collections. Pages receive it through the
/// Leptos context and never address storage keys themselves.
#[derive(Clone)]
pub struct StoreClient {
    backend: Rc<dyn KeyValueStore>,
    prefix: String,
}

impl Default for StoreClient {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreClient {
    pub fn new() -> Self {
        Self::new_with_backend(Rc::new(LocalStorageStore), &config::storage_prefix())
    }

    pub fn new_with_backend(backend: Rc<dyn KeyValueStore>, prefix: &str) -> Self {
        Self {
            backend,
            prefix: prefix.to_string(),
        }
    }

    pub fn in_memory() -> Self {
        Self::new_with_backend(
            Rc::new(MemoryStore::default()),
            config::DEFAULT_STORAGE_PREFIX,
        )
    }

    pub fn key(&self, collection: Collection) -> String {
        collection.storage_key(&self.prefix)
    }

    pub fn try_load_all<T: DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> Result<Vec<T>, StoreError> {
        Ok(self.try_load_one(collection)?.unwrap_or_default())
    }

    /// Reads a collection, degrading to an empty list when storage is
    /// unavailable or holds data that no longer parses.
    pub fn load_all<T: DeserializeOwned>(&self, collection: Collection) -> Vec<T> {
        match self.try_load_all(collection) {
            Ok(items) => items,
            Err(err) => {
                log::warn!("{err}; treating {collection:?} as empty");
                Vec::new()
            }
        }
    }

    pub fn save_all<T: Serialize>(
        &self,
        collection: Collection,
        items: &[T],
    ) -> Result<(), StoreError> {
        self.save_one(collection, &items)
    }

    pub fn try_load_one<T: DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> Result<Option<T>, StoreError> {
        let key = self.key(collection);
        match self.backend.get(&key)? {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| StoreError::Malformed { key, source }),
        }
    }

    pub fn save_one<T: Serialize + ?Sized>(
        &self,
        collection: Collection,
        item: &T,
    ) -> Result<(), StoreError> {
        let key = self.key(collection);
        let raw = serde_json::to_string(item).map_err(|source| StoreError::Encode {
            key: key.clone(),
            source,
        })?;
        self.backend.set(&key, &raw)
    }

    pub fn remove(&self, collection: Collection) -> Result<(), StoreError> {
        self.backend.remove(&self.key(collection))
    }

    pub fn employees(&self) -> Vec<Employee> {
        self.load_all(Collection::Employees)
    }

    pub fn clients(&self) -> Vec<Client> {
        self.load_all(Collection::Clients)
    }

    pub fn time_records(&self) -> Vec<TimeRecord> {
        self.load_all(Collection::TimeRecords)
    }

    pub fn save_employees(&self, employees: &[Employee]) -> Result<(), StoreError> {
        self.save_all(Collection::Employees, employees)
    }

    pub fn save_clients(&self, clients: &[Client]) -> Result<(), StoreError> {
        self.save_all(Collection::Clients, clients)
    }

    pub fn save_time_records(&self, records: &[TimeRecord]) -> Result<(), StoreError> {
        self.save_all(Collection::TimeRecords, records)
    }

    pub fn session(&self) -> Option<Principal> {
        match self.try_load_one(Collection::Session) {
            Ok(principal) => principal,
            Err(err) => {
                log::warn!("{err}; ignoring stored session");
                None
            }
        }
    }

    pub fn save_session(&self, principal: &Principal) -> Result<(), StoreError> {
        self.save_one(Collection::Session, principal)
    }

    pub fn clear_session(&self) -> Result<(), StoreError> {
        self.remove(Collection::Session)
    }
}
