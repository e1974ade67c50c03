use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Shown when the dictionary entry has no definition text
pub const NO_DEFINITION: &str = "No definition available";
/// Shown when the dictionary entry has no usage example
pub const NO_EXAMPLE: &str = "No example available";

/// A word the user has seen, as stored in history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub id: String,
    pub word: String,
    pub definition: String,
    pub example: String,
    pub date: DateTime<Utc>,
}

impl Word {
    /// Build a word stamped with a fresh id and the current time
    pub fn new(word: impl Into<String>, definition: impl Into<String>, example: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            word: word.into(),
            definition: definition.into(),
            example: example.into(),
            date: Utc::now(),
        }
    }
}

/// Render a stored timestamp as a short display date, e.g. "Mar 5, 2026"
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn format_date_is_short_and_stable() {
        let date = Utc.with_ymd_and_hms(2026, 3, 5, 14, 30, 0).unwrap();
        assert_eq!(format_date(&date), "Mar 5, 2026");
        // Pure projection: same input, same output
        assert_eq!(format_date(&date), format_date(&date));
    }

    #[test]
    fn format_date_does_not_pad_the_day() {
        let date = Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap();
        assert_eq!(format_date(&date), "Dec 1, 2025");
    }

    #[test]
    fn new_words_get_distinct_ids() {
        let a = Word::new("time", "def", "ex");
        let b = Word::new("time", "def", "ex");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn word_round_trips_through_json() {
        let word = Word::new("serendipity", "a happy accident", "pure serendipity");
        let json = serde_json::to_string(&word).unwrap();
        let back: Word = serde_json::from_str(&json).unwrap();
        assert_eq!(back, word);
    }
}
