pub mod history;
pub mod kv;

pub use history::WordStore;
pub use kv::{FileStore, KeyValueStore, StoreError};
