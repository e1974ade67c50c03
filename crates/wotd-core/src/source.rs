use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wotd_dictionary::Lookup;
use wotd_store::{KeyValueStore, WordStore};
use wotd_types::{NO_DEFINITION, NO_EXAMPLE, Word};

use crate::fallback::FALLBACK_WORDS;
use crate::headwords::COMMON_HEADWORDS;

/// Produces one new `Word` per request.
///
/// A live lookup is preferred; on any failure one of the embedded fallback
/// words is used instead. The caller always gets a word, and every word
/// (fallback included) is appended to the history before it is returned.
pub struct WordSource<L: Lookup, S: KeyValueStore> {
    lookup: L,
    store: WordStore<S>,
    rng: SmallRng,
}

impl<L: Lookup, S: KeyValueStore> WordSource<L, S> {
    pub fn new(lookup: L, store: WordStore<S>) -> Self {
        Self::with_rng(lookup, store, SmallRng::from_os_rng())
    }

    /// Pin word selection with a seeded rng
    pub fn with_rng(lookup: L, store: WordStore<S>, rng: SmallRng) -> Self {
        Self { lookup, store, rng }
    }

    pub async fn fetch_random_word(&mut self) -> Word {
        let headword = COMMON_HEADWORDS[self.rng.random_range(0..COMMON_HEADWORDS.len())];

        let word = match self.lookup.lookup(headword).await {
            Ok(entry) => Word::new(
                entry.word,
                entry.definition.unwrap_or_else(|| NO_DEFINITION.to_string()),
                entry.example.unwrap_or_else(|| NO_EXAMPLE.to_string()),
            ),
            Err(e) => {
                tracing::warn!("Lookup of {headword:?} failed, using a fallback word: {e}");
                self.random_fallback()
            }
        };

        self.store.append(&word).await;
        word
    }

    pub async fn history(&self) -> Vec<Word> {
        self.store.load().await
    }

    pub async fn clear_history(&self) {
        self.store.clear().await
    }

    fn random_fallback(&mut self) -> Word {
        let entry = &FALLBACK_WORDS[self.rng.random_range(0..FALLBACK_WORDS.len())];
        Word::new(entry.word, entry.definition, entry.example)
    }
}
