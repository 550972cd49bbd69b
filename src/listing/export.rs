use crate::analysis::FrequencyEntry;
use crate::errors::SubwordResult;
use crate::subtitles::Token;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `word\tcount` lines to `out`
pub fn write_frequency_listing<W: Write>(
    mut out: W,
    entries: &[FrequencyEntry],
) -> SubwordResult<()> {
    for entry in entries {
        writeln!(out, "{}\t{}", entry.word, entry.count)?;
    }
    out.flush()?;
    Ok(())
}

/// Write `ordinal\tword\tseconds` lines to `out`
pub fn write_token_listing<W: Write>(mut out: W, tokens: &[Token]) -> SubwordResult<()> {
    for (idx, token) in tokens.iter().enumerate() {
        writeln!(out, "{}\t{}\t{}", idx + 1, token.word, token.end_time_seconds)?;
    }
    out.flush()?;
    Ok(())
}

/// Write the frequency listing to a file, replacing it if present
pub fn write_frequency_listing_to<P: AsRef<Path>>(
    path: P,
    entries: &[FrequencyEntry],
) -> SubwordResult<()> {
    let file = File::create(path.as_ref())?;
    write_frequency_listing(BufWriter::new(file), entries)?;
    info!(
        "Wrote {} frequency entries to {}",
        entries.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Write the token listing to a file, replacing it if present
pub fn write_token_listing_to<P: AsRef<Path>>(path: P, tokens: &[Token]) -> SubwordResult<()> {
    let file = File::create(path.as_ref())?;
    write_token_listing(BufWriter::new(file), tokens)?;
    info!("Wrote {} tokens to {}", tokens.len(), path.as_ref().display());
    Ok(())
}
