use super::utils::format_timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// One timestamped subtitle entry as read from an SRT file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Cue {
    pub index: u32,
    pub start_time: Duration,
    pub end_time: Duration,
    pub text: String,
}

impl Cue {
    pub fn new(
        index: u32,
        start_time: Duration,
        end_time: Duration,
        text: impl Into<String>,
    ) -> Self {
        Self {
            index,
            start_time,
            end_time,
            text: text.into(),
        }
    }

    pub fn end_seconds(&self) -> f64 {
        self.end_time.as_secs_f64()
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{} --> {}\n{}",
            self.index,
            format_timestamp(self.start_time.as_secs_f64()),
            format_timestamp(self.end_seconds()),
            self.text
        )
    }
}

/// A recognised word carrying the end time of the cue it came from
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Token {
    pub word: String,
    pub end_time_seconds: f64,
}

impl Token {
    pub fn new(word: impl Into<String>, end_time_seconds: f64) -> Self {
        Self {
            word: word.into(),
            end_time_seconds,
        }
    }
}

/// A cue block that could not be parsed and was left out of the cue list
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SkippedBlock {
    /// 1-based line number of the first line of the block
    pub line: usize,
    pub reason: String,
}

/// Cues parsed from one subtitle text together with the blocks that were skipped
#[derive(Serialize, Debug, Default)]
pub struct LoadReport {
    pub cues: Vec<Cue>,
    pub skipped: Vec<SkippedBlock>,
}

/// An opened subtitle: decoded text and the token stream derived from it
#[derive(Serialize, Debug)]
pub struct SubtitleDocument {
    pub raw_text: String,
    pub cues: Vec<Cue>,
    pub tokens: Vec<Token>,
    pub skipped: Vec<SkippedBlock>,
}
