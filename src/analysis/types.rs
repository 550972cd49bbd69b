use serde::{Deserialize, Serialize};

/// A distinct word and how many times it occurs in the token stream
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub word: String,
    pub count: usize,
}

impl FrequencyEntry {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Cumulative occurrence counts sampled at time-bucket boundaries (minutes).
///
/// Always starts at the origin `(0, 0)`. The origin is never incremented, so an
/// occurrence in bucket 0 opens a second point at time 0.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimeSeries {
    pub times: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Default for TimeSeries {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSeries {
    pub fn new() -> Self {
        Self {
            times: vec![0.0],
            counts: vec![0],
        }
    }

    /// Record one occurrence in `bucket`
    pub fn record(&mut self, bucket: f64) {
        let last = self.counts.len() - 1;
        if last > 0 && self.times[last] == bucket {
            self.counts[last] += 1;
        } else {
            let previous = self.counts[last];
            self.times.push(bucket);
            self.counts.push(previous + 1);
        }
    }

    /// Final cumulative count
    pub fn total(&self) -> usize {
        self.counts.last().copied().unwrap_or(0)
    }

    /// Number of points, origin included
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// True when nothing was recorded (only the origin is present)
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.times.iter().copied().zip(self.counts.iter().copied())
    }
}

/// An ordered, non-empty-by-convention sequence of lowercase words to search for
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    words: Vec<String>,
}

impl Phrase {
    /// Lowercase `text` and split it on whitespace
    pub fn parse(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(|w| w.into().to_lowercase()).collect(),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words joined by single spaces
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

/// The token that completed one phrase occurrence
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct PhraseMatch {
    pub token_index: usize,
    pub end_time_seconds: f64,
}

/// Statistic accumulated by the timeline aggregator
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesMode {
    /// Every token counts
    TotalCount,
    /// Only the first occurrence of each distinct word counts
    UniqueCount,
    /// Every completed phrase match counts
    PhraseCount(Phrase),
}

impl SeriesMode {
    pub fn name(&self) -> &str {
        match self {
            SeriesMode::TotalCount => "total_count",
            SeriesMode::UniqueCount => "unique_count",
            SeriesMode::PhraseCount(_) => "phrase_count",
        }
    }
}
