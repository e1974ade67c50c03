use wotd_types::Word;

use crate::kv::KeyValueStore;

const HISTORY_KEY: &str = "word_history";

/// Durable word history over a single slot, newest first.
///
/// History is an enhancement, not critical state: every operation is best
/// effort and storage faults never reach the caller. A failed read behaves
/// like an empty history; a failed write is logged and dropped.
pub struct WordStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> WordStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the full history; empty on absence, read failure, or corrupt JSON
    pub async fn load(&self) -> Vec<Word> {
        let raw = match self.store.get(HISTORY_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read word history: {e}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(history) => history,
            Err(e) => {
                tracing::warn!("Discarding corrupt word history: {e}");
                Vec::new()
            }
        }
    }

    /// Prepend a word and write the whole list back
    pub async fn append(&self, word: &Word) {
        let mut history = self.load().await;
        history.insert(0, word.clone());
        self.write(&history).await;
    }

    /// Replace the history with an empty list
    pub async fn clear(&self) {
        self.write(&[]).await;
    }

    async fn write(&self, history: &[Word]) {
        let json = match serde_json::to_string(history) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to serialize word history: {e}");
                return;
            }
        };

        if let Err(e) = self.store.set(HISTORY_KEY, &json).await {
            tracing::warn!("Failed to write word history: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use wotd_types::Word;

    use super::*;
    use crate::kv::FileStore;

    async fn open_store(dir: &std::path::Path) -> WordStore<FileStore> {
        WordStore::new(FileStore::open(dir).await.unwrap())
    }

    #[tokio::test]
    async fn load_of_fresh_store_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(dir.path()).await;

        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn append_prepends_and_keeps_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(dir.path()).await;

        let first = Word::new("time", "a point or period", "about time");
        let second = Word::new("water", "a clear liquid", "drink water");
        store.append(&first).await;

        let before = store.load().await;
        store.append(&second).await;
        let after = store.load().await;

        assert_eq!(after[0], second);
        assert_eq!(&after[1..], &before[..]);
    }

    #[tokio::test]
    async fn repeats_of_the_same_headword_stay_distinct() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(dir.path()).await;

        store.append(&Word::new("time", "def", "ex")).await;
        store.append(&Word::new("time", "def", "ex")).await;

        let history = store.load().await;
        assert_eq!(history.len(), 2);
        assert_ne!(history[0].id, history[1].id);
    }

    #[tokio::test]
    async fn clear_empties_regardless_of_prior_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(dir.path()).await;

        store.append(&Word::new("time", "def", "ex")).await;
        store.append(&Word::new("water", "def", "ex")).await;
        store.clear().await;

        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn history_survives_a_restart() {
        let dir = tempfile::tempdir().unwrap();
        let word = Word::new("resilience", "toughness", "remarkable resilience");
        {
            let store = open_store(dir.path()).await;
            store.append(&word).await;
        }

        let reopened = open_store(dir.path()).await;
        assert_eq!(reopened.load().await, vec![word]);
    }

    #[tokio::test]
    async fn corrupt_slot_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("word_history.json"), "not json {").unwrap();

        let store = open_store(dir.path()).await;
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn append_on_top_of_corrupt_slot_starts_over() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("word_history.json"), "[{\"bad\":").unwrap();

        let store = open_store(dir.path()).await;
        let word = Word::new("eloquent", "persuasive", "an eloquent speech");
        store.append(&word).await;

        assert_eq!(store.load().await, vec![word]);
    }
}
