pub mod client;

pub use client::DictionaryApiClient;

/// What a single lookup yields: the headword plus the first meaning's
/// first definition, if the entry carries one at all.
#[derive(Debug, Clone)]
pub struct DictionaryEntry {
    pub word: String,
    pub definition: Option<String>,
    pub example: Option<String>,
}

/// Remote dictionary lookup interface
#[async_trait::async_trait]
pub trait Lookup: Send + Sync {
    /// Look up a single headword
    async fn lookup(&self, headword: &str) -> Result<DictionaryEntry, LookupError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Response contained no entries")]
    EmptyResponse,

    #[error("Entry has no meanings or definitions")]
    MissingMeanings,
}
