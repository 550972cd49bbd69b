use super::types::FrequencyEntry;
use crate::errors::NotFoundError;
use crate::subtitles::Token;
use log::debug;
use serde::Serialize;
use std::collections::HashMap;

/// Count distinct words, most frequent first; equal counts in ascending word order
pub fn build_frequency_table(tokens: &[Token]) -> Vec<FrequencyEntry> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token.word.as_str()).or_insert(0) += 1;
    }

    let mut entries: Vec<FrequencyEntry> = counts
        .into_iter()
        .map(|(word, count)| FrequencyEntry::new(word, count))
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));

    debug!(
        "Frequency table: {} distinct words over {} tokens",
        entries.len(),
        tokens.len()
    );
    entries
}

/// 1-based position of `word` in a frequency table
pub fn position_of(word: &str, entries: &[FrequencyEntry]) -> Result<usize, NotFoundError> {
    entries
        .iter()
        .position(|entry| entry.word == word)
        .map(|idx| idx + 1)
        .ok_or_else(|| NotFoundError::new(word))
}

/// Ordinal rank of `word` such as `"3rd"`, or `"0th"` when the word is absent
pub fn rank_of(word: &str, entries: &[FrequencyEntry]) -> String {
    ordinal(position_of(word, entries).unwrap_or(0))
}

/// English ordinal: `1st`, `2nd`, `3rd`, `4th`, `11th`, `12th`, `13th`, `21st`, ...
pub fn ordinal(n: usize) -> String {
    let suffix = match (n % 100, n % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// A built frequency table with lookup helpers
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    pub fn build(tokens: &[Token]) -> Self {
        Self {
            entries: build_frequency_table(tokens),
        }
    }

    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<FrequencyEntry> {
        self.entries
    }

    /// Number of distinct words
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all counts, equal to the token count the table was built from
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn count_of(&self, word: &str) -> usize {
        self.entries
            .iter()
            .find(|entry| entry.word == word)
            .map_or(0, |entry| entry.count)
    }

    pub fn rank_of(&self, word: &str) -> String {
        rank_of(word, &self.entries)
    }
}
