//! Generic key-value store trait, in-memory implementation and JSON helpers.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{NavigatorError, NavigatorResult};

pub const USER_PROFILE_KEY: &str = "userProfile";
pub const SEARCH_HISTORY_KEY: &str = "searchHistory";

/// Browser-storage style string store.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> NavigatorResult<()>;
    fn delete(&mut self, key: &str) -> bool;
    fn keys(&self) -> Vec<String>;
}

#[derive(Debug, Default)]
pub struct MemoryKvStore {
    data: HashMap<String, String>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> NavigatorResult<()> {
        self.data.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> bool {
        self.data.remove(key).is_some()
    }

    fn keys(&self) -> Vec<String> {
        self.data.keys().cloned().collect()
    }
}

pub fn save_json<T: Serialize + ?Sized>(
    store: &mut dyn KvStore,
    key: &str,
    value: &T,
) -> NavigatorResult<()> {
    let data = serde_json::to_string(value)?;
    store.set(key, data)
}

/// `Ok(None)` when the key is missing, an error when the stored value does
/// not parse.
pub fn load_json<T: DeserializeOwned>(store: &dyn KvStore, key: &str) -> NavigatorResult<Option<T>> {
    let Some(data) = store.get(key) else {
        return Ok(None);
    };
    serde_json::from_str(&data)
        .map(Some)
        .map_err(|error| NavigatorError::Storage(format!("failed to parse {key}: {error}")))
}
