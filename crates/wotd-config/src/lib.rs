use serde::{Deserialize, Serialize};

use self::api::ApiConfig;
use self::storage::StorageConfig;

pub mod api;
pub mod storage;

#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
}

impl Config {
    /// Build a config from the environment, falling back to defaults
    pub fn new() -> Self {
        Config {
            api: ApiConfig::new(),
            storage: StorageConfig::new(),
        }
    }
}
