use crate::analysis::FrequencyEntry;
use crate::errors::{ParseError, SubwordResult};
use crate::subtitles::Token;
use std::io::BufRead;

fn malformed(line_no: usize, what: &str, line: &str) -> ParseError {
    ParseError::new(format!("line {}: {} in '{}'", line_no, what, line))
}

/// Read a listing written by `write_frequency_listing`; blank lines are ignored
pub fn read_frequency_listing<R: BufRead>(input: R) -> SubwordResult<Vec<FrequencyEntry>> {
    let mut entries = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;

        let mut fields = line.split('\t');
        let (Some(word), Some(count), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(malformed(line_no, "expected 2 tab-separated fields", &line).into());
        };
        let count = count
            .trim()
            .parse::<usize>()
            .map_err(|_| malformed(line_no, "invalid count", &line))?;

        entries.push(FrequencyEntry::new(word, count));
    }

    Ok(entries)
}

/// Read a listing written by `write_token_listing`, in ordinal order
pub fn read_token_listing<R: BufRead>(input: R) -> SubwordResult<Vec<Token>> {
    let mut tokens = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;

        let mut fields = line.split('\t');
        let (Some(ordinal), Some(word), Some(seconds), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(malformed(line_no, "expected 3 tab-separated fields", &line).into());
        };

        let ordinal = ordinal
            .trim()
            .parse::<usize>()
            .map_err(|_| malformed(line_no, "invalid ordinal", &line))?;
        if ordinal != tokens.len() + 1 {
            return Err(malformed(line_no, "ordinal out of sequence", &line).into());
        }
        let seconds = seconds
            .trim()
            .parse::<f64>()
            .map_err(|_| malformed(line_no, "invalid timestamp", &line))?;

        tokens.push(Token::new(word, seconds));
    }

    Ok(tokens)
}
