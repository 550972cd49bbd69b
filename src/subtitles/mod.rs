mod parser;
mod tokenizer;
mod types;
mod utils;

pub use parser::{load_cues, load_cues_from_bytes, load_cues_with_report, parse_time_range};
pub use tokenizer::{scan_words, tokenize_cue, tokenize_cues};
pub use types::{Cue, LoadReport, SkippedBlock, SubtitleDocument, Token};
pub use utils::{decode_latin1, format_timestamp};

#[cfg(test)]
pub mod unit_test;
