use serde::Deserialize;

use crate::{DictionaryEntry, Lookup, LookupError};

/// Client for a dictionaryapi.dev-style endpoint:
/// GET `<base_url>/<headword>` returns a JSON array of entries.
#[derive(Clone)]
pub struct DictionaryApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl DictionaryApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl Lookup for DictionaryApiClient {
    async fn lookup(&self, headword: &str) -> Result<DictionaryEntry, LookupError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), headword);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(LookupError::Status(response.status()));
        }

        let entries: Vec<ApiEntry> = response.json().await?;
        first_definition(entries)
    }
}

/// Reduce the response to its first meaning's first definition.
/// Deeper meanings are ignored regardless of richness.
fn first_definition(entries: Vec<ApiEntry>) -> Result<DictionaryEntry, LookupError> {
    let entry = entries.into_iter().next().ok_or(LookupError::EmptyResponse)?;

    let definition = entry
        .meanings
        .into_iter()
        .next()
        .and_then(|meaning| meaning.definitions.into_iter().next())
        .ok_or(LookupError::MissingMeanings)?;

    Ok(DictionaryEntry {
        word: entry.word,
        definition: definition.definition,
        example: definition.example,
    })
}

#[derive(Deserialize)]
struct ApiEntry {
    word: String,
    #[serde(default)]
    meanings: Vec<ApiMeaning>,
}

#[derive(Deserialize)]
struct ApiMeaning {
    #[serde(default)]
    definitions: Vec<ApiDefinition>,
}

#[derive(Deserialize)]
struct ApiDefinition {
    definition: Option<String>,
    example: Option<String>,
}
