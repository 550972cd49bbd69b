pub mod subtitles;
pub use subtitles::{Cue, SubtitleDocument, Token};

pub mod analysis;
pub use analysis::{
    frequency_table, phrase_frequency, phrase_rank, word_count_series, word_variety_series,
    FrequencyEntry, Phrase, SeriesMode, TimeSeries,
};

pub mod listing;

pub mod ports;
pub use ports::{ChartRenderer, CueSource, MetadataProvider};

pub mod config;
pub use config::AnalysisConfig;

pub mod session;
pub use session::{open, open_source, AnalysisSession};

pub mod errors;
pub use errors::{CollaboratorError, NotFoundError, ParseError, SubwordError, SubwordResult};
