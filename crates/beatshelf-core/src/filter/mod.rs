//! Search query filtering over catalog entries

use crate::catalog::CatalogEntry;

/// Case-insensitive token filter over beatmap and difficulty names.
///
/// The query is mutated per keystroke by the front end; every application
/// re-derives the filtered view from scratch, so the same entries and query
/// always produce the same output.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    query: String,
}

impl SearchFilter {
    /// Create a filter with an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the whole query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Append one character (typed input).
    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    /// Remove the last character (backspace).
    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    /// Clear the query entirely.
    pub fn clear(&mut self) {
        self.query.clear();
    }

    /// Derive the filtered subsequence, preserving relative order.
    ///
    /// The query is lowercased and split on whitespace; an entry is retained
    /// iff every token is a substring of its lowercased beatmap name or
    /// difficulty name. Tokens may match either field independently. An
    /// empty query returns the full sequence.
    pub fn apply<'a>(&self, entries: &'a [CatalogEntry]) -> Vec<&'a CatalogEntry> {
        let query = self.query.to_lowercase();
        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() {
            return entries.iter().collect();
        }

        entries
            .iter()
            .filter(|entry| {
                let name = entry.beatmap_name.to_lowercase();
                let difficulty = entry.difficulty_name.to_lowercase();
                terms
                    .iter()
                    .all(|term| name.contains(term) || difficulty.contains(term))
            })
            .collect()
    }
}
