pub mod local_storage;

pub use local_storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, StorageError};
