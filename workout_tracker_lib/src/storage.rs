use std::collections::HashMap;

use crate::{error::StorageError, workout::Workout};

/// String key-value storage, the shape of browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Persists the whole workout list as one JSON array under a single key.
#[derive(Debug, Clone)]
pub struct WorkoutStorage<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> WorkoutStorage<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Overwrites whatever was stored before.
    pub fn save(&mut self, workouts: &[Workout]) -> Result<(), StorageError> {
        let json = serde_json::to_string(workouts)?;
        self.store.set(&self.key, &json)
    }

    /// `Ok(None)` when nothing has been saved yet.
    pub fn load(&self) -> Result<Option<Vec<Workout>>, StorageError> {
        let Some(json) = self.store.get(&self.key)? else {
            return Ok(None);
        };

        serde_json::from_str(&json)
            .map(Some)
            .map_err(|source| StorageError::Malformed {
                key: self.key.clone(),
                source,
            })
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.remove(&self.key)
    }
}
