//! Core types of cinotes.
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A single submitted text entry.
///
/// The text is stored trimmed and is never empty.
/// `created_at` is a Unix timestamp in UTC seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    text: String,
    created_at: i64,
}

impl Note {
    /// Build a note from text that has already been trimmed and checked.
    pub(crate) fn new(text: String, created_at: i64) -> Self {
        Note { text, created_at }
    }

    pub(crate) fn now(text: String) -> Self {
        Note::new(text, Utc::now().timestamp())
    }

    pub fn get_text(&self) -> &str {
        &self.text
    }

    pub fn get_created_at(&self) -> i64 {
        self.created_at
    }

    /// `created_at` as an ISO-8601 UTC string with a trailing `Z`.
    pub fn created_at_iso(&self) -> String {
        DateTime::<Utc>::from_timestamp(self.created_at, 0)
            .unwrap_or_default()
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// Case-insensitive substring match.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn contains_lowercase(&self, needle: &str) -> bool {
        self.text.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_timestamp() {
        let note = Note::new("a".to_owned(), 0);
        assert_eq!(note.created_at_iso(), "1970-01-01T00:00:00Z");
        let note = Note::new("a".to_owned(), 1_700_000_000);
        assert_eq!(note.created_at_iso(), "2023-11-14T22:13:20Z");
    }

    #[test]
    fn serialized_fields() {
        let note = Note::new("buy milk".to_owned(), 42);
        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(value["text"], "buy milk");
        assert_eq!(value["created_at"], 42);
    }

    #[test]
    fn lowercase_match() {
        let note = Note::new("Buy MILK".to_owned(), 0);
        assert!(note.contains_lowercase("milk"));
        assert!(note.contains_lowercase("y m"));
        assert!(!note.contains_lowercase("bread"));
    }
}
