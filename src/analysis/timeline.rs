use super::phrase::PhraseMatcher;
use super::types::{SeriesMode, TimeSeries};
use crate::subtitles::Token;
use log::{debug, warn};
use std::collections::HashSet;

/// Bucket start (minutes) for a token ending at `seconds`.
///
/// The time is first rounded up to a whole minute, then snapped down to the window
/// grid: with a 5 minute window, 61 s lands in bucket 0 and 241 s in bucket 5.
pub fn bucket_minutes(seconds: f64, window_minutes: f64) -> f64 {
    ((seconds / 60.0).ceil() / window_minutes).floor() * window_minutes
}

fn effective_window(window_minutes: f64) -> f64 {
    if window_minutes.is_finite() && window_minutes > 0.0 {
        window_minutes
    } else {
        warn!(
            "Invalid time window {} minutes, falling back to 1 minute",
            window_minutes
        );
        1.0
    }
}

/// Cumulative series of `mode` over `tokens`, grouped into windows of `window_minutes`
pub fn bucket_by_time(tokens: &[Token], window_minutes: f64, mode: &SeriesMode) -> TimeSeries {
    let window = effective_window(window_minutes);
    let mut series = TimeSeries::new();

    match mode {
        SeriesMode::TotalCount => {
            for token in tokens {
                series.record(bucket_minutes(token.end_time_seconds, window));
            }
        }
        SeriesMode::UniqueCount => {
            let mut seen: HashSet<&str> = HashSet::new();
            for token in tokens {
                if seen.insert(token.word.as_str()) {
                    series.record(bucket_minutes(token.end_time_seconds, window));
                }
            }
        }
        SeriesMode::PhraseCount(phrase) => {
            let mut matcher = PhraseMatcher::new(phrase);
            for token in tokens {
                if matcher.feed(&token.word) {
                    series.record(bucket_minutes(token.end_time_seconds, window));
                }
            }
        }
    }

    debug!(
        "{} series: {} points, total {}",
        mode.name(),
        series.len(),
        series.total()
    );
    series
}
