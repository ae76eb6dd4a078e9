use gloo_console::warn;
use gloo_storage::{LocalStorage, Storage};
use workout_tracker_lib::{
    config::CONFIG_STORAGE_KEY, storage::KeyValueStore, StorageError, TrackerConfig,
};

/// Browser local storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw().get_item(key).map_err(|err| StorageError::Read {
            key: key.into(),
            reason: format!("{err:?}"),
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw().set_item(key, value).map_err(|err| StorageError::Write {
            key: key.into(),
            reason: format!("{err:?}"),
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        LocalStorage::raw().remove_item(key).map_err(|err| StorageError::Write {
            key: key.into(),
            reason: format!("{err:?}"),
        })
    }
}

/// Defaults, optionally overridden by JSON stored under the config key.
pub fn load_config() -> TrackerConfig {
    let stored = match BrowserStore.get(CONFIG_STORAGE_KEY) {
        Ok(Some(json)) => json,
        Ok(None) => return TrackerConfig::default(),
        Err(err) => {
            warn!(format!("Using default config: {err}"));
            return TrackerConfig::default();
        }
    };

    TrackerConfig::from_json(&stored).unwrap_or_else(|err| {
        warn!(format!("Ignoring invalid config in {CONFIG_STORAGE_KEY:?}: {err}"));
        TrackerConfig::default()
    })
}
