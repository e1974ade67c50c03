use std::env;

use serde::{Deserialize, Serialize};

const DEFAULT_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the dictionary endpoint; the headword is appended as a path segment
    pub base_url: String,
}

impl ApiConfig {
    pub fn new() -> Self {
        let base_url = env::var("WOTD_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self { base_url }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}
