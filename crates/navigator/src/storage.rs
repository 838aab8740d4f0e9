//! Key-value persistence boundary. The core never performs I/O itself;
//! callers hand in a store.

pub mod kv_store;

pub use kv_store::{load_json, save_json, KvStore, MemoryKvStore, SEARCH_HISTORY_KEY, USER_PROFILE_KEY};
