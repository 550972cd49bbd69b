use super::types::{Cue, LoadReport, SkippedBlock};
use super::utils::{decode_latin1, is_index_line, normalize_text, timestamp_from_parts};
use crate::errors::{ParseError, SubwordResult};
use log::{debug, info, warn};
use regex::{Captures, Regex};
use std::sync::OnceLock;
use std::time::Duration;

fn time_range_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // Trailing text after the end time (SRT position hints) is tolerated.
        Regex::new(
            r"^\s*(\d+):(\d{1,2}):(\d{1,2})[,.](\d{1,3})\s*-->\s*(\d+):(\d{1,2}):(\d{1,2})[,.](\d{1,3})",
        )
        .expect("time range pattern is valid")
    })
}

fn field<'t>(caps: &Captures<'t>, i: usize) -> &'t str {
    caps.get(i).map_or("", |m| m.as_str())
}

/// Parse an SRT time-range line into `(start, end)`
pub fn parse_time_range(line: &str) -> Option<(Duration, Duration)> {
    let caps = time_range_pattern().captures(line)?;
    let start = timestamp_from_parts(
        field(&caps, 1),
        field(&caps, 2),
        field(&caps, 3),
        field(&caps, 4),
    )?;
    let end = timestamp_from_parts(
        field(&caps, 5),
        field(&caps, 6),
        field(&caps, 7),
        field(&caps, 8),
    )?;
    Some((start, end))
}

/// Parse raw subtitle bytes, decoding one byte per character
pub fn load_cues_from_bytes(data: &[u8]) -> SubwordResult<Vec<Cue>> {
    load_cues(&decode_latin1(data))
}

/// Parse SRT text into its ordered cue list
pub fn load_cues(raw: &str) -> SubwordResult<Vec<Cue>> {
    Ok(load_cues_with_report(raw)?.cues)
}

/// Parse SRT text, also reporting the blocks that had to be skipped.
///
/// Anything before the first cue-index marker is ignored. A block without a
/// usable time range is skipped with a warning; a text that yields no cue at all
/// is an error.
pub fn load_cues_with_report(raw: &str) -> SubwordResult<LoadReport> {
    let text = normalize_text(raw);
    let lines: Vec<&str> = text.split('\n').collect();

    let first = find_first_cue(&lines).ok_or_else(|| {
        ParseError::new("no cue index marker followed by a time range was found")
    })?;
    if first > 0 {
        debug!("Skipped {} preamble lines before the first cue", first);
    }

    let mut report = LoadReport::default();
    let mut block_start = first;
    let mut pos = first;

    while pos <= lines.len() {
        let at_break = pos == lines.len() || lines[pos].trim().is_empty();
        if at_break {
            if pos > block_start {
                parse_block(&lines[block_start..pos], block_start + 1, &mut report);
            }
            block_start = pos + 1;
        }
        pos += 1;
    }

    if report.cues.is_empty() {
        return Err(ParseError::new(format!(
            "no valid cue blocks found ({} malformed)",
            report.skipped.len()
        ))
        .into());
    }

    info!(
        "Loaded {} cues ({} blocks skipped)",
        report.cues.len(),
        report.skipped.len()
    );
    Ok(report)
}

/// Index of the first line that is a cue index immediately followed by a time range
fn find_first_cue(lines: &[&str]) -> Option<usize> {
    lines
        .windows(2)
        .position(|pair| is_index_line(pair[0]) && parse_time_range(pair[1]).is_some())
}

fn parse_block(block: &[&str], first_line: usize, report: &mut LoadReport) {
    // A block normally opens with its index; an index-less block starting directly
    // with the time range is accepted too.
    let (index, timing_at) = if is_index_line(block[0]) {
        let index = block[0].trim().parse::<u32>().unwrap_or(0);
        (index, 1)
    } else {
        (report.cues.len() as u32 + 1, 0)
    };

    let range = block.get(timing_at).and_then(|line| parse_time_range(line));
    let Some((start, end)) = range else {
        let reason = match block.get(timing_at) {
            Some(line) => format!("missing time range, found '{}'", line.trim()),
            None => "missing time range".to_string(),
        };
        warn!("Skipping cue block at line {}: {}", first_line, reason);
        report.skipped.push(SkippedBlock {
            line: first_line,
            reason,
        });
        return;
    };

    let text = block[timing_at + 1..].join("\n");
    debug!("Cue {} ends at {:.3}s", index, end.as_secs_f64());
    report.cues.push(Cue::new(index, start, end, text));
}
