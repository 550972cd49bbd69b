mod frequency;
mod phrase;
mod timeline;
mod types;

pub use frequency::{build_frequency_table, ordinal, position_of, rank_of, FrequencyTable};
pub use phrase::{count_matches, find_matches, PhraseMatcher};
pub use timeline::{bucket_by_time, bucket_minutes};
pub use types::{FrequencyEntry, Phrase, PhraseMatch, SeriesMode, TimeSeries};

use crate::subtitles::Token;

/// Cumulative occurrences of `phrase` (free text) over time
pub fn phrase_frequency(tokens: &[Token], phrase: &str, window_minutes: f64) -> TimeSeries {
    bucket_by_time(
        tokens,
        window_minutes,
        &SeriesMode::PhraseCount(Phrase::parse(phrase)),
    )
}

/// Ordinal frequency rank of `phrase` among single words, `"0th"` if it never occurs as one
pub fn phrase_rank(tokens: &[Token], phrase: &str) -> String {
    let entries = build_frequency_table(tokens);
    rank_of(&Phrase::parse(phrase).text(), &entries)
}

/// Cumulative number of words spoken over time
pub fn word_count_series(tokens: &[Token], window_minutes: f64) -> TimeSeries {
    bucket_by_time(tokens, window_minutes, &SeriesMode::TotalCount)
}

/// Cumulative number of distinct words introduced over time
pub fn word_variety_series(tokens: &[Token], window_minutes: f64) -> TimeSeries {
    bucket_by_time(tokens, window_minutes, &SeriesMode::UniqueCount)
}

/// Descending frequency table of the token stream
pub fn frequency_table(tokens: &[Token]) -> Vec<FrequencyEntry> {
    build_frequency_table(tokens)
}
