use crate::analysis::{self, FrequencyEntry, TimeSeries};
use crate::config::AnalysisConfig;
use crate::errors::SubwordResult;
use crate::listing::{write_frequency_listing_to, write_token_listing_to};
use crate::ports::{
    ChartRenderer, ChartRequest, CueSource, FileCueSource, FilmInfo, MetadataProvider,
};
use crate::subtitles::{
    decode_latin1, load_cues_with_report, tokenize_cues, SubtitleDocument, Token,
};
use log::info;
use std::path::{Path, PathBuf};

/// Read and tokenize the subtitle file at `path`
pub fn open<P: AsRef<Path>>(path: P) -> SubwordResult<SubtitleDocument> {
    open_source(&FileCueSource::new(path))
}

/// Read and tokenize a subtitle from any source
pub fn open_source<S: CueSource + ?Sized>(source: &S) -> SubwordResult<SubtitleDocument> {
    let data = source.fetch()?;
    let raw_text = decode_latin1(&data);
    let report = load_cues_with_report(&raw_text)?;
    let tokens = tokenize_cues(&report.cues);

    info!(
        "Opened {}: {} cues, {} tokens",
        source.describe(),
        report.cues.len(),
        tokens.len()
    );

    Ok(SubtitleDocument {
        raw_text,
        cues: report.cues,
        tokens,
        skipped: report.skipped,
    })
}

/// Look up film details for the open subtitle through the injected provider
pub async fn film_info<M: MetadataProvider + ?Sized>(
    provider: &M,
    query: &str,
) -> SubwordResult<FilmInfo> {
    let info = provider.lookup(query).await?;
    info!("Film lookup '{}' resolved to '{}'", query, info.title);
    Ok(info)
}

/// The currently open subtitle and its cached token stream.
///
/// Holds at most one document; opening another replaces it. All views are
/// recomputed from the cached tokens and use the configured windows.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    config: AnalysisConfig,
    document: Option<SubtitleDocument>,
}

impl AnalysisSession {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            document: None,
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn open<P: AsRef<Path>>(&mut self, path: P) -> SubwordResult<&SubtitleDocument> {
        self.open_source(&FileCueSource::new(path))
    }

    /// Open a new subtitle; on failure the previously open one is kept
    pub fn open_source<S: CueSource + ?Sized>(
        &mut self,
        source: &S,
    ) -> SubwordResult<&SubtitleDocument> {
        let document = open_source(source)?;
        if self.document.is_some() {
            info!("Replacing previously open subtitle with {}", source.describe());
        }
        Ok(&*self.document.insert(document))
    }

    pub fn close(&mut self) {
        self.document = None;
    }

    pub fn is_open(&self) -> bool {
        self.document.is_some()
    }

    pub fn document(&self) -> Option<&SubtitleDocument> {
        self.document.as_ref()
    }

    /// Token stream of the open subtitle, empty when nothing is open
    pub fn tokens(&self) -> &[Token] {
        self.document.as_ref().map_or(&[][..], |doc| doc.tokens.as_slice())
    }

    pub fn phrase_frequency(&self, phrase: &str) -> TimeSeries {
        analysis::phrase_frequency(self.tokens(), phrase, self.config.phrase_window_minutes)
    }

    pub fn phrase_rank(&self, phrase: &str) -> String {
        analysis::phrase_rank(self.tokens(), phrase)
    }

    pub fn word_count_series(&self) -> TimeSeries {
        analysis::word_count_series(self.tokens(), self.config.word_count_window_minutes)
    }

    pub fn word_variety_series(&self) -> TimeSeries {
        analysis::word_variety_series(self.tokens(), self.config.word_variety_window_minutes)
    }

    pub fn frequency_table(&self) -> Vec<FrequencyEntry> {
        analysis::frequency_table(self.tokens())
    }

    pub fn render_phrase_frequency<R: ChartRenderer + ?Sized>(
        &self,
        renderer: &R,
        phrase: &str,
    ) -> SubwordResult<PathBuf> {
        renderer.render(&ChartRequest::phrase_frequency(
            phrase,
            self.phrase_frequency(phrase),
        ))
    }

    pub fn render_word_count<R: ChartRenderer + ?Sized>(
        &self,
        renderer: &R,
    ) -> SubwordResult<PathBuf> {
        renderer.render(&ChartRequest::word_count(self.word_count_series()))
    }

    pub fn render_word_variety<R: ChartRenderer + ?Sized>(
        &self,
        renderer: &R,
    ) -> SubwordResult<PathBuf> {
        renderer.render(&ChartRequest::word_variety(self.word_variety_series()))
    }

    pub fn export_frequency_listing<P: AsRef<Path>>(&self, path: P) -> SubwordResult<()> {
        write_frequency_listing_to(path, &self.frequency_table())
    }

    pub fn export_token_listing<P: AsRef<Path>>(&self, path: P) -> SubwordResult<()> {
        write_token_listing_to(path, self.tokens())
    }
}
